//! tally-map: a word-frequency tally over a separately chained hash
//! table with arena-backed collision chains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the hard part (the chained table) pure and fully
//!   deterministic, and push every side effect to thin edges.
//! - Layers:
//!   - ChainTable: slot array of chain heads plus a `SlotMap` arena of
//!     nodes; owns insert/lookup/bump, load-factor bookkeeping and
//!     automatic doubling rehash. Produces the report as a plain string.
//!   - wordcount: tokenizer and drivers (read file, feed tokens, write
//!     report) returning `Result<_, TallyError>`.
//!   - `tally` binary: stdin-driven CLI that wires the two together.
//!
//! Constraints
//! - Single-threaded, synchronous; the table is mutated by one caller
//!   and a rehash completes before the triggering insert returns.
//! - Words are lowercased on entry; every lookup is case-insensitive.
//! - No deletion and no shrinking: the slot array only ever doubles,
//!   staying a power-of-two multiple of its initial size.
//! - Raw `insert` never merges duplicates; merge semantics are the
//!   caller's explicit choice via `ensure`/`bump`. This looseness is
//!   part of the contract, not an accident, and is pinned by tests.
//!
//! Why this split?
//! - The table never performs I/O, so every collision/rehash scenario is
//!   testable without touching the filesystem.
//! - Chain nodes live in an arena and link through slotmap keys, giving
//!   each node a single owner (predecessor or slot head) with no
//!   raw-pointer hazards.

pub mod chain_table;
mod chain_table_proptest;
pub mod error;
pub mod wordcount;

// Public surface
pub use chain_table::ChainTable;
pub use error::TallyError;
pub use wordcount::{tally_file, tally_text, tokenize, write_report};
