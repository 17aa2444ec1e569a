//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;

use jobboard::config::{BoardConfig, LogFormat, LoggingConfig};
use jobboard::model::{ImageRef, Job, JobId, Priority, Requirement, Requirements, Status};

/// Builder for `Job` records as they would appear in storage.
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            job: Job {
                id: JobId(id),
                title: title.to_string(),
                description: String::new(),
                requirements: Requirements::default(),
                priority: Priority::NotSpecified,
                status: Status::NotStarted,
                date_submitted: date(2026, 3, 2),
                date_complete: None,
                image: None,
                comments: String::new(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.job.description = description.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.job.priority = priority;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.job.status = status;
        self
    }

    pub fn require(mut self, requirement: Requirement) -> Self {
        self.job.requirements.set(requirement, true);
        self
    }

    pub fn submitted(mut self, date: NaiveDate) -> Self {
        self.job.date_submitted = date;
        self
    }

    /// Marks the job completed on `date`.
    pub fn completed(mut self, date: NaiveDate) -> Self {
        self.job.status = Status::Completed;
        self.job.date_complete = Some(date);
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.job.image = Some(ImageRef::new(image));
        self
    }

    pub fn comments(mut self, comments: &str) -> Self {
        self.job.comments = comments.to_string();
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}

/// Builder for `BoardConfig` instances.
pub struct ConfigBuilder {
    config: BoardConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BoardConfig::default(),
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.config.version = version.to_string();
        self
    }

    pub fn database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database_path = Some(path.into());
        self
    }

    pub fn storage_key(mut self, key: &str) -> Self {
        self.config.storage_key = key.to_string();
        self
    }

    pub fn logging(mut self, level: &str, format: LogFormat) -> Self {
        self.config.logging = LoggingConfig {
            level: level.to_string(),
            format,
        };
        self
    }

    pub fn build(self) -> BoardConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
