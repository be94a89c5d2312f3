//! Local override store
//!
//! Persists caller-supplied Pokémon records in an embedded DuckDB
//! database and merges them with upstream data on retrieval: a local
//! override always shadows the upstream record.

mod merger;
mod overrides;

pub use merger::RecordMerger;
pub use overrides::{OverrideStore, UpsertOutcome};
