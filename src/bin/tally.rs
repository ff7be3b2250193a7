//! tally: count word occurrences in a text file and report collision
//! statistics.
//!
//! Reads two whitespace-separated tokens from standard input: the path of
//! the UTF-8 text file to count, then the path the report is written to.
//! The report also goes to stdout. No flags, no environment variables.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tally_map::{tally_file, write_report};

fn run() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read file paths from stdin")?;

    let mut paths = input.split_whitespace();
    let in_path = paths.next().context("missing input file path on stdin")?;
    let out_path = paths.next().context("missing output file path on stdin")?;

    let table = tally_file(Path::new(in_path))?;
    let report = table.render();
    print!("{report}");
    write_report(&table, Path::new(out_path))?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tally: {err:#}");
            ExitCode::FAILURE
        }
    }
}
