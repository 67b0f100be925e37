use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::error::PersistenceError;
use crate::model::DrillRecord;
use crate::repository::backend::KeyValueBackend;

pub const DRILLS_KEY: &str = "drills";

/// Single source of truth for drill records.
///
/// The persistence model is whole-collection read-modify-write: every query
/// reads the full ledger and every mutation rewrites it. Fine at this data
/// scale; an indexed store would be the next step if it ever grew.
pub struct DrillRepository<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> DrillRepository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns every persisted record. A missing or malformed value reads as
    /// an empty ledger, never as an error.
    pub fn load_all(&self) -> Result<Vec<DrillRecord>, PersistenceError> {
        let raw = match self.backend.get(DRILLS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(key = DRILLS_KEY, error = %e, "discarding malformed ledger data");
                Ok(Vec::new())
            }
        }
    }

    pub fn query_by_date(&self, date: NaiveDate) -> Result<Vec<DrillRecord>, PersistenceError> {
        let mut records = self.load_all()?;
        records.retain(|d| d.date == date);
        Ok(records)
    }

    /// Records with `start <= date <= end`.
    pub fn query_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DrillRecord>, PersistenceError> {
        let mut records = self.load_all()?;
        records.retain(|d| d.date >= start && d.date <= end);
        Ok(records)
    }

    pub fn query_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<DrillRecord>, PersistenceError> {
        let mut records = self.load_all()?;
        records.retain(|d| d.date.year() == year && d.date.month() == month);
        Ok(records)
    }

    pub fn query_by_year(&self, year: i32) -> Result<Vec<DrillRecord>, PersistenceError> {
        let mut records = self.load_all()?;
        records.retain(|d| d.date.year() == year);
        Ok(records)
    }

    /// Replaces everything stored for `date` with `new_records`. Not a merge:
    /// a record for that date missing from `new_records` is discarded.
    pub fn replace_day(
        &self,
        date: NaiveDate,
        new_records: Vec<DrillRecord>,
    ) -> Result<(), PersistenceError> {
        let mut all = self.load_all()?;
        all.retain(|d| d.date != date);
        all.extend(new_records);
        self.store(&all)
    }

    /// Deletes a single record by id, regardless of date. No-op if absent.
    pub fn remove(&self, id: &str) -> Result<(), PersistenceError> {
        let mut all = self.load_all()?;
        all.retain(|d| d.id != id);
        self.store(&all)
    }

    fn store(&self, records: &[DrillRecord]) -> Result<(), PersistenceError> {
        let raw =
            serde_json::to_string_pretty(records).map_err(|source| PersistenceError::Encode {
                key: DRILLS_KEY.to_string(),
                source,
            })?;
        self.backend.set(DRILLS_KEY, &raw)
    }
}
