//! Error types for tally-map.

use std::path::PathBuf;
use thiserror::Error;

/// Errors the tally drivers can produce. Table operations themselves are
/// infallible; only the file-reading and report-writing edges fail.
#[derive(Error, Debug)]
pub enum TallyError {
    /// The input file could not be read (missing, permissions, or not
    /// valid UTF-8).
    #[error("failed to read input file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The report could not be written to the output file.
    #[error("failed to write report to '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
