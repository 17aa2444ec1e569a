//! Uncommitted job input: the add-job draft and partial field updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::job::{ImageRef, Job, Requirement, Requirements};
use super::status::{Priority, Status};

/// The in-progress record behind the "add job" form.
///
/// Same shape as [`Job`] minus `id` and `date_submitted`, which the store
/// assigns on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub requirements: Requirements,
    pub priority: Priority,
    pub status: Status,
    #[serde(with = "super::job::optional_date")]
    pub date_complete: Option<NaiveDate>,
    pub image: Option<ImageRef>,
    pub comments: String,
}

impl JobDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.set(requirement, true);
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// True when the title is empty or whitespace-only.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Restores the default shape, as after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A partial set of field assignments for an existing job.
///
/// `None` leaves a field untouched. `date_complete` and `image` nest a second
/// `Option` so they can be cleared: `Some(None)` removes the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Requirements>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub date_complete: Option<Option<NaiveDate>>,
    pub image: Option<Option<ImageRef>>,
    pub comments: Option<String>,
}

impl JobChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = Some(requirements);
        self
    }

    pub fn date_complete(mut self, date: Option<NaiveDate>) -> Self {
        self.date_complete = Some(date);
        self
    }

    pub fn image(mut self, image: Option<ImageRef>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the assignments into `job`, leaving unspecified fields alone.
    ///
    /// Fields are independent: setting `status` never touches
    /// `date_complete` and vice versa.
    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(priority) = self.priority {
            job.priority = priority;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(date_complete) = self.date_complete {
            job.date_complete = date_complete;
        }
        if let Some(image) = self.image {
            job.image = image;
        }
        if let Some(comments) = self.comments {
            job.comments = comments;
        }
    }
}
