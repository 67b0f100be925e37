use thiserror::Error;

/// Input rejected before it reaches the store. No partial write occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("drill name must not be empty")]
    EmptyName,
    #[error("invalid shot count: {0:?}")]
    InvalidShots(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("month {0} is out of range")]
    InvalidMonth(u32),
}

/// Underlying storage failed to read or write. The in-memory state of the
/// caller is left unchanged; re-invoking the operation is safe.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to read key {key:?}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to write key {key:?}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to encode value for key {key:?}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to create data directory {path:?}: {source}")]
    DataDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Umbrella error for service-level operations.
///
/// Note that a persisted value which exists but fails to decode is *not* an
/// error anywhere in this crate: lenient reads treat it as an empty ledger so
/// the UI stays usable after corruption.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
