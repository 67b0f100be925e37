use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::PersistenceError;

const DEFAULT_DATA_DIR: &str = ".shotlog";

/// String-keyed persistence backend. Synchronous and process-local;
/// capacity and durability guarantees are the backend's own business.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Backend that keeps one JSON file per key under a data directory.
#[derive(Clone)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    pub fn new(base_dir: PathBuf) -> Result<Self, PersistenceError> {
        fs::create_dir_all(&base_dir).map_err(|source| PersistenceError::DataDir {
            path: base_dir.clone(),
            source,
        })?;
        Ok(Self { base_dir })
    }

    /// Opens the backend under `~/.shotlog`.
    pub fn open_default() -> Result<Self, PersistenceError> {
        let home_dir = dirs::home_dir().ok_or(PersistenceError::NoHomeDir)?;
        Self::new(home_dir.join(DEFAULT_DATA_DIR))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.path_for(key), value).map_err(|source| PersistenceError::Write {
            key: key.to_string(),
            source,
        })
    }
}

/// In-memory backend. Clones share the same map, so a service and a test
/// assertion can observe the same state.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
