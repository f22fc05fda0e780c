//! # CSV Table
//!
//! A whole CSV file held in memory. Rows keep the order they had in the
//! source, and the only mutation offered is appending a column, so the
//! written table always lines up row for row with the one that was read.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use netkit_common::error::ToolError;

#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Loads the CSV file at `path`, header row included.
    pub fn read_path(path: &Path) -> Result<Self, ToolError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ToolError::FileNotFound(path.to_path_buf()),
            _ => ToolError::io(path, e),
        })?;
        Self::from_reader(file)
    }

    /// Parses a CSV document. A document with no columns or no data rows is
    /// [`ToolError::EmptyInput`].
    ///
    /// Rows shorter than the header are padded with empty cells. Rows longer
    /// than the header are rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ToolError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| ToolError::Other(format!("Failed to read CSV headers: {e}")))?
            .clone();
        if headers.is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let width = headers.len();
        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let mut record = record.map_err(|e| {
                ToolError::Other(format!("Failed to parse CSV row {}: {e}", index + 1))
            })?;
            if record.len() > width {
                return Err(ToolError::Other(format!(
                    "Failed to parse CSV row {}: expected {width} fields, found {}",
                    index + 1,
                    record.len()
                )));
            }
            while record.len() < width {
                record.push_field("");
            }
            rows.push(record);
        }

        let table = Self { headers, rows };
        if table.is_empty() {
            return Err(ToolError::EmptyInput);
        }
        Ok(table)
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn column_names(&self) -> Vec<String> {
        self.headers.iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, ToolError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ToolError::MissingColumn {
                column: name.to_string(),
                available: self.column_names(),
            })
    }

    /// Cell values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row.get(index).unwrap_or_default())
    }

    /// Appends a column. `values` must hold exactly one entry per row.
    pub fn append_column<I, S>(&mut self, name: &str, values: I) -> Result<(), ToolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = values.into_iter().collect();
        if values.len() != self.rows.len() {
            return Err(ToolError::Other(format!(
                "column '{name}' has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }

        self.headers.push_field(name);
        for (row, value) in self.rows.iter_mut().zip(&values) {
            row.push_field(value.as_ref());
        }
        Ok(())
    }

    /// Writes the table, header first, to `path`.
    pub fn write_path(&self, path: &Path) -> Result<(), ToolError> {
        let file = File::create(path).map_err(|e| ToolError::io(path, e))?;
        self.to_writer(file)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), ToolError> {
        let to_error = |e: csv::Error| ToolError::Other(format!("Failed to write CSV: {e}"));

        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers).map_err(to_error)?;
        for row in &self.rows {
            writer.write_record(row).map_err(to_error)?;
        }
        writer
            .flush()
            .map_err(|e| ToolError::Other(format!("Failed to write CSV: {e}")))
    }
}
