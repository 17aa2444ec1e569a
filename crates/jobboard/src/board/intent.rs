//! User intents routed from the front end into the dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::model::{JobChanges, JobId, Priority, Requirement, Status};

/// A single field edit on the add-job draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Description(String),
    Priority(Priority),
    Status(Status),
    Requirement(Requirement, bool),
    DateComplete(Option<NaiveDate>),
    Comments(String),
    Image(PathBuf),
    ClearImage,
    Reset,
}

/// Everything a user can do on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    EditDraft(DraftEdit),
    SubmitDraft,
    UpdateJob { id: JobId, changes: JobChanges },
    AttachImage { id: JobId, path: PathBuf },
    SetActive(JobId),
    ClearActive,
    DeleteJob(JobId),
}

/// Result of applying an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    DraftEdited,
    Added(JobId),
    Updated(JobId),
    Deleted(JobId),
    ActiveChanged(Option<JobId>),
    /// The referenced job does not exist; nothing changed.
    NotFound(JobId),
    /// The user declined the confirmation; nothing changed.
    Cancelled,
    Rejected(ValidationError),
}
