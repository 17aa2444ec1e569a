//! Domain types for the job board.

pub mod draft;
pub mod job;
pub mod status;

pub use draft::{JobChanges, JobDraft};
pub use job::{ImageRef, Job, JobId, Requirement, Requirements};
pub use status::{ParseChoiceError, Priority, Status};
