//! Persistence bridge between the job store and durable key-value storage.
//!
//! The full collection is stored as one JSON blob under a single key. It is
//! read once at startup and overwritten wholesale after every mutation.

pub mod kv;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::model::{Job, JobId};
use crate::store::JobStore;

pub use kv::{KeyValueStore, MemoryStore};

/// Key the job collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "jobs";

/// Reads and writes the job collection through a [`KeyValueStore`].
#[derive(Debug)]
pub struct PersistenceBridge<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the stored collection for startup.
    ///
    /// Absent, unreadable, or unparsable data yields an empty store; the
    /// cause is logged and never surfaced.
    pub fn load(&self) -> JobStore {
        match self.try_load() {
            Ok(Some(jobs)) => {
                info!(key = %self.key, count = jobs.len(), "Loaded jobs from storage");
                JobStore::from_jobs(jobs)
            }
            Ok(None) => {
                debug!(key = %self.key, "No stored jobs, starting empty");
                JobStore::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable stored jobs, starting empty");
                JobStore::new()
            }
        }
    }

    /// Reads and decodes the stored collection, reporting failures.
    pub fn try_load(&self) -> Result<Option<Vec<Job>>, StorageError> {
        match self.storage.get(&self.key)? {
            Some(raw) => decode_jobs(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Overwrites the stored entry with the full current collection.
    pub fn save(&self, store: &JobStore) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(store.jobs()).map_err(|e| StorageError::Encode {
            key: self.key.clone(),
            source: e,
        })?;
        self.storage.set(&self.key, &encoded)?;
        debug!(key = %self.key, count = store.len(), bytes = encoded.len(), "Persisted jobs");
        Ok(())
    }

    /// Writes the collection as pretty-printed JSON to `path`.
    pub fn export_to(&self, store: &JobStore, path: &Path) -> Result<(), StorageError> {
        let encoded = export_json(store)?;
        std::fs::write(path, encoded).map_err(|e| StorageError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), count = store.len(), "Exported jobs");
        Ok(())
    }

    /// Reads a collection previously written by [`export_to`](Self::export_to)
    /// (or the raw stored blob). A file that repeats an id is rejected whole.
    pub fn import_from(&self, path: &Path) -> Result<Vec<Job>, StorageError> {
        let raw = std::fs::read_to_string(path).map_err(|e| StorageError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let jobs = decode_jobs(&raw)?;
        if let Some(id) = first_duplicate_id(&jobs) {
            warn!(path = %path.display(), job_id = %id, "import rejected, duplicate id");
            return Err(StorageError::DuplicateId(id));
        }
        Ok(jobs)
    }
}

/// Pretty JSON form of the collection, same schema as the stored blob.
pub fn export_json(store: &JobStore) -> Result<String, StorageError> {
    serde_json::to_string_pretty(store.jobs()).map_err(|e| StorageError::Encode {
        key: DEFAULT_STORAGE_KEY.to_string(),
        source: e,
    })
}

fn decode_jobs(raw: &str) -> Result<Vec<Job>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

fn first_duplicate_id(jobs: &[Job]) -> Option<JobId> {
    let mut seen = HashSet::with_capacity(jobs.len());
    jobs.iter().map(|j| j.id).find(|id| !seen.insert(*id))
}
