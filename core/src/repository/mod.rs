pub mod backend;
pub mod drills;
pub mod saved_names;

// Re-export
pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use drills::DrillRepository;
pub use saved_names::SavedNameRegistry;
