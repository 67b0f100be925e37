use serde::{Deserialize, Serialize};

/// Aggregated totals over a date range (week, month or year).
///
/// Derived on demand from a ledger snapshot; never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PeriodSummary {
    pub total_shots: u64,
    pub distinct_days_trained: usize,
    /// `None` when no drills fall in the period. Ties resolve to the name
    /// whose first occurrence comes earliest in the input.
    pub most_common_drill_name: Option<String>,
}
