use std::collections::HashMap;

/// Distinct values of a column with how often each occurs.
///
/// Ordered by count, most frequent first. Equal counts keep the order in
/// which the values first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManufacturerSummary {
    counts: Vec<(String, usize)>,
}

impl ManufacturerSummary {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for value in values {
            let value = value.as_ref();
            match positions.get(value) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(value.to_string(), counts.len());
                    counts.push((value.to_string(), 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(value, count)| (value.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
