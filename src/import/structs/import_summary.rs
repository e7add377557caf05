use serde::{Deserialize, Serialize};

/// Statement counters of a finished import.
///
/// `attempted` always equals `applied + failed + skipped + rolled_back`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub attempted: u64,
    /// Statements that succeeded and were committed.
    pub applied: u64,
    pub failed: u64,
    /// Transaction control statements carried by the dump itself.
    pub skipped: u64,
    /// Statements that succeeded but were undone when a later failure rolled
    /// the whole transaction back.
    pub rolled_back: u64,
}
