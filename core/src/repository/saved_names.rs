use tracing::warn;

use crate::error::PersistenceError;
use crate::repository::backend::KeyValueBackend;

pub const SAVED_NAMES_KEY: &str = "savedDrills";

/// Previously used drill names, kept for quick re-entry. Insertion order,
/// case-sensitive, independent lifecycle from the drill ledger.
pub struct SavedNameRegistry<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> SavedNameRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn list(&self) -> Result<Vec<String>, PersistenceError> {
        let raw = match self.backend.get(SAVED_NAMES_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_str(&raw) {
            Ok(names) => Ok(names),
            Err(e) => {
                warn!(key = SAVED_NAMES_KEY, error = %e, "discarding malformed saved-name data");
                Ok(Vec::new())
            }
        }
    }

    /// Appends `name` unless an exact match is already present.
    pub fn remember(&self, name: &str) -> Result<(), PersistenceError> {
        let mut names = self.list()?;
        if names.iter().any(|n| n == name) {
            return Ok(());
        }
        names.push(name.to_string());
        self.store(&names)
    }

    /// Removes an exact match. No-op if absent.
    pub fn forget(&self, name: &str) -> Result<(), PersistenceError> {
        let mut names = self.list()?;
        names.retain(|n| n != name);
        self.store(&names)
    }

    fn store(&self, names: &[String]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(names).map_err(|source| PersistenceError::Encode {
            key: SAVED_NAMES_KEY.to_string(),
            source,
        })?;
        self.backend.set(SAVED_NAMES_KEY, &raw)
    }
}
