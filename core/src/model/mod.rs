pub mod drill;
pub mod summary;

pub use drill::DrillRecord;
pub use summary::PeriodSummary;
