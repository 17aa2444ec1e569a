use jobboard::db::DatabaseError;
use jobboard::{ConfigError, JobId, JobboardError, StorageError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Board(#[from] JobboardError),

    #[error("No job with id {0}")]
    NotFound(JobId),

    #[error("No database path configured and no home directory found")]
    NoDatabasePath,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

// Library errors reach the CLI through `JobboardError`.
impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Board(e.into())
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        CliError::Board(e.into())
    }
}

impl From<DatabaseError> for CliError {
    fn from(e: DatabaseError) -> Self {
        CliError::Board(e.into())
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        CliError::Board(e.into())
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
