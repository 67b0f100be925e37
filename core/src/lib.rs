pub mod aggregate;
pub mod calendar;
pub mod error;
pub mod input;
pub mod model;
pub mod notify;
pub mod repository;
pub mod service;
pub mod usecase;

pub use error::{LedgerError, PersistenceError, Result, ValidationError};
pub use input::{parse_date, parse_shots};
pub use model::{DrillRecord, PeriodSummary};
pub use notify::{ChangeNotifier, Subscription};
pub use repository::{DrillRepository, FileBackend, KeyValueBackend, MemoryBackend, SavedNameRegistry};
pub use service::LedgerService;
pub use usecase::ViewUseCase;
