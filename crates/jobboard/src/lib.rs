pub mod board;
pub mod broadcast;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod store;

pub use board::{Dashboard, DraftEdit, Intent, Outcome, Prompter};
pub use broadcast::{BoardEvent, BoardEvents};
pub use config::{load_config, load_or_default, BoardConfig};
pub use db::Database;
pub use error::{ConfigError, JobboardError, Result, StorageError, ValidationError};
pub use model::{Job, JobChanges, JobDraft, JobId, Priority, Requirement, Status};
pub use persistence::{KeyValueStore, MemoryStore, PersistenceBridge};
pub use store::{compute_summary, Clock, JobStore, Summary, SystemClock};
