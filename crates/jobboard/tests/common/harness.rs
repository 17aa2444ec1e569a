//! Test harness for isolated test execution.
//!
//! The `TestHarness` owns a temporary directory holding the SQLite database,
//! exported files, and config files, plus a frozen clock.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use jobboard::board::Dashboard;
use jobboard::config::BoardConfig;
use jobboard::persistence::PersistenceBridge;
use jobboard::store::FixedClock;
use jobboard::Database;

pub type TestDashboard = Dashboard<Database, Arc<FixedClock>>;

/// Test harness providing an isolated board environment.
pub struct TestHarness {
    /// Temporary directory containing the database and any written files.
    temp_dir: TempDir,
    /// Path to the SQLite file within temp_dir.
    pub db_path: PathBuf,
    /// Clock shared by every dashboard the harness opens.
    pub clock: Arc<FixedClock>,
}

impl TestHarness {
    /// Create a new harness with the clock frozen at 2026-03-02.
    pub fn new() -> Self {
        Self::at_date(NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"))
    }

    pub fn at_date(date: NaiveDate) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("data").join("jobboard.db");

        Self {
            temp_dir,
            db_path,
            clock: Arc::new(FixedClock::at_date(date)),
        }
    }

    /// Get the base temp directory path.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Open (or reopen) the database file.
    pub fn database(&self) -> Database {
        Database::open(&self.db_path).expect("Failed to open database")
    }

    /// Open a fresh dashboard session over the database file.
    pub fn open_dashboard(&self) -> TestDashboard {
        self.open_dashboard_with_key(jobboard::persistence::DEFAULT_STORAGE_KEY)
    }

    pub fn open_dashboard_with_key(&self, key: &str) -> TestDashboard {
        Dashboard::open_with_clock(
            PersistenceBridge::with_key(self.database(), key),
            Arc::clone(&self.clock),
        )
    }

    /// Write a config file into the temp directory.
    pub fn write_config(&self, filename: &str, config: &BoardConfig) -> PathBuf {
        let path = self.temp_dir.path().join(filename);
        let json = serde_json::to_string_pretty(config).expect("Failed to serialize config");
        std::fs::write(&path, json).expect("Failed to write config file");
        path
    }

    /// Write raw text into the temp directory.
    pub fn write_file(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(filename);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Move the frozen clock to `date`.
    pub fn set_date(&self, date: NaiveDate) {
        self.clock.set_date(date);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
