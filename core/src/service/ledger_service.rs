use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::model::DrillRecord;
use crate::notify::{ChangeNotifier, Subscription};
use crate::repository::{DrillRepository, KeyValueBackend, SavedNameRegistry};

/// Owns the drill store, the saved-name registry and the change notifier.
///
/// Constructed once per process over an injected backend and handed to each
/// view, so there is no hidden global state. Mutating ledger operations fire
/// one change notification after the write succeeds; other mounted views
/// re-query on receipt.
pub struct LedgerService<B: KeyValueBackend> {
    drills: DrillRepository<B>,
    names: SavedNameRegistry<B>,
    notifier: ChangeNotifier,
}

impl<B: KeyValueBackend + Clone> LedgerService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            drills: DrillRepository::new(backend.clone()),
            names: SavedNameRegistry::new(backend),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl<B: KeyValueBackend> LedgerService<B> {
    /// Validates and mints a new record, and remembers its name for re-entry.
    ///
    /// The record is not persisted here: the daily view accumulates records
    /// in memory and commits them with `save_day`, matching the add-then-save
    /// flow of the UI.
    pub fn create_drill(&self, name: &str, shots: u32, date: NaiveDate) -> Result<DrillRecord> {
        let record = DrillRecord::new(name, shots, date)?;
        self.names.remember(&record.name)?;
        Ok(record)
    }

    /// Commits a day: replaces everything stored for `date` with `records`.
    pub fn save_day(&self, date: NaiveDate, records: Vec<DrillRecord>) -> Result<()> {
        debug!(%date, count = records.len(), "saving day");
        self.drills.replace_day(date, records)?;
        self.notifier.notify();
        Ok(())
    }

    /// Deletes one record by id. No-op if absent; still notifies.
    pub fn remove_drill(&self, id: &str) -> Result<()> {
        debug!(id, "removing drill");
        self.drills.remove(id)?;
        self.notifier.notify();
        Ok(())
    }

    pub fn drills(&self) -> Result<Vec<DrillRecord>> {
        Ok(self.drills.load_all()?)
    }

    pub fn drills_on(&self, date: NaiveDate) -> Result<Vec<DrillRecord>> {
        Ok(self.drills.query_by_date(date)?)
    }

    pub fn drills_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DrillRecord>> {
        Ok(self.drills.query_by_range(start, end)?)
    }

    pub fn drills_in_month(&self, year: i32, month: u32) -> Result<Vec<DrillRecord>> {
        Ok(self.drills.query_by_month(year, month)?)
    }

    pub fn drills_in_year(&self, year: i32) -> Result<Vec<DrillRecord>> {
        Ok(self.drills.query_by_year(year)?)
    }

    pub fn saved_names(&self) -> Result<Vec<String>> {
        Ok(self.names.list()?)
    }

    pub fn forget_name(&self, name: &str) -> Result<()> {
        Ok(self.names.forget(name)?)
    }

    /// Subscribes to ledger-change notifications. The view keeps the handle
    /// until unmount; dropping it unsubscribes.
    pub fn subscribe<F: Fn() + 'static>(&self, listener: F) -> Subscription {
        self.notifier.subscribe(listener)
    }
}
