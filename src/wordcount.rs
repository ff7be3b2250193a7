//! Tokenization and the tally drivers around [`ChainTable`].
//!
//! Deliberately thin: reading a file, splitting it into tokens and
//! writing the report are collaborators of the table, not part of it.

use std::fs;
use std::path::Path;

use crate::chain_table::ChainTable;
use crate::error::TallyError;

/// Split `text` on every character that is not an ASCII letter or digit.
///
/// Empty tokens appear wherever two separators are adjacent (and at the
/// edges); they are yielded as-is, since the empty string is a valid key
/// for the table. Filtering is the caller's choice, not the tokenizer's.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
}

/// Tally every token of `text` into a fresh table, in input order.
pub fn tally_text(text: &str) -> ChainTable {
    let mut table = ChainTable::new();
    for token in tokenize(text) {
        table.ensure(token);
    }
    table
}

/// Read `path` fully into memory and tally it.
pub fn tally_file(path: &Path) -> Result<ChainTable, TallyError> {
    let text = fs::read_to_string(path).map_err(|source| TallyError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tally_text(&text))
}

/// Write the table's rendered report to `path`, creating the file if
/// absent and truncating it if present.
pub fn write_report(table: &ChainTable, path: &Path) -> Result<(), TallyError> {
    fs::write(path, table.render()).map_err(|source| TallyError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
