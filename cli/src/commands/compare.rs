use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use netkit_common::error::ToolError;
use netkit_core::folders::{self, Comparison};

use crate::commands::CompareArgs;
use crate::terminal::print;

pub fn compare(args: CompareArgs) -> anyhow::Result<Comparison> {
    print::header("File Comparison Tool");

    let first = match args.first {
        Some(path) => path,
        None => prompt_stdin("Enter the path for the first folder: ")?,
    };
    let second = match args.second {
        Some(path) => path,
        None => prompt_stdin("Enter the path for the second folder: ")?,
    };

    let comparison = folders::compare_folders(&first, &second)?;

    for path in &comparison.missing {
        print::failure(&ToolError::PathNotFound(path.clone()).to_string());
    }

    print::blank();
    if comparison.common.is_empty() {
        print::print_status("No files are common between the two folders.");
    } else {
        print::print_status("Files existing in both folders:");
        for name in &comparison.common {
            print::print(name);
        }
    }
    print::end_of_program();

    Ok(comparison)
}

fn prompt_stdin(question: &str) -> anyhow::Result<PathBuf> {
    let stdin = io::stdin();
    prompt(&mut stdin.lock(), &mut io::stdout(), question)
}

/// Asks `question` on `output` and reads one trimmed line from `input`.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<PathBuf> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read folder path")?;
    anyhow::ensure!(read > 0, "no folder path given: input closed");

    Ok(PathBuf::from(line.trim()))
}
