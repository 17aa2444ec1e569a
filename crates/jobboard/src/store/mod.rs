//! The job store: authoritative ordered collection of jobs.
//!
//! All mutation goes through [`JobStore`]. Derived views (status columns,
//! summary) are computed on demand from the current collection and never
//! cached.

pub mod clock;
pub mod summary;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::model::{Job, JobChanges, JobDraft, JobId, Status};

pub use clock::{Clock, FixedClock, SystemClock};
pub use summary::{compute_summary, Summary};

/// Ordered, in-memory job collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobStore {
    jobs: Vec<Job>,
    /// Highest id issued or loaded so far.
    last_id: Option<JobId>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from previously persisted jobs, keeping their order.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        let last_id = jobs.iter().map(|j| j.id).max();
        Self { jobs, last_id }
    }

    /// Jobs in insertion order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.get(id).is_some()
    }

    /// Creates a job from `draft` and appends it.
    ///
    /// Fails without touching the store or the draft when the title is
    /// blank. On success the draft is reset to its default shape.
    pub fn add_job(
        &mut self,
        draft: &mut JobDraft,
        clock: &impl Clock,
    ) -> Result<&Job, ValidationError> {
        if draft.has_blank_title() {
            return Err(ValidationError::EmptyTitle);
        }

        let id = self.next_id(clock.now_millis());
        let draft = std::mem::take(draft);
        let job = Job {
            id,
            title: draft.title,
            description: draft.description,
            requirements: draft.requirements,
            priority: draft.priority,
            status: draft.status,
            date_submitted: clock.today(),
            date_complete: draft.date_complete,
            image: draft.image,
            comments: draft.comments,
        };

        debug!(job_id = %id, title = %job.title, "job added");
        self.last_id = self.last_id.max(Some(id));
        self.jobs.push(job);
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Merges `changes` into the job with `id`.
    ///
    /// Returns `false` (and changes nothing) when no such job exists.
    pub fn update_job(&mut self, id: JobId, changes: JobChanges) -> bool {
        match self.jobs.iter_mut().find(|j| j.id == id) {
            Some(job) => {
                changes.apply_to(job);
                debug!(job_id = %id, "job updated");
                true
            }
            None => {
                debug!(job_id = %id, "update ignored, job not found");
                false
            }
        }
    }

    /// Removes the job with `id`, returning it if it existed.
    pub fn delete_job(&mut self, id: JobId) -> Option<Job> {
        let index = self.jobs.iter().position(|j| j.id == id)?;
        debug!(job_id = %id, "job deleted");
        Some(self.jobs.remove(index))
    }

    /// Replaces the whole collection, as after an import.
    pub fn replace_all(&mut self, jobs: Vec<Job>) {
        let previous_last = self.last_id;
        *self = Self::from_jobs(jobs);
        self.last_id = self.last_id.max(previous_last);
    }

    /// Jobs with the given status, in insertion order.
    pub fn with_status(&self, status: Status) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(move |j| j.status == status)
    }

    /// Partition into the three status columns, in board order.
    pub fn columns(&self) -> [(Status, Vec<&Job>); 3] {
        Status::ALL.map(|status| (status, self.with_status(status).collect()))
    }

    pub fn summary(&self) -> Summary {
        compute_summary(&self.jobs)
    }

    /// Creation-time id, bumped past the last issued id when the clock has
    /// not moved forward.
    fn next_id(&self, now_millis: i64) -> JobId {
        let candidate = match self.last_id {
            Some(JobId(last)) if now_millis <= last => last.checked_add(1),
            _ => Some(now_millis),
        };
        match candidate {
            Some(id) => JobId(id),
            None => self.first_free_id(now_millis),
        }
    }

    /// First id at or after `from` (wrapping to zero) not held by any job.
    /// Only reached once the high-water mark sits at `i64::MAX`.
    fn first_free_id(&self, from: i64) -> JobId {
        let start = from.max(0);
        let id = (start..=i64::MAX)
            .chain(0..start)
            .map(JobId)
            .find(|id| !self.contains(*id))
            .unwrap_or(JobId(start));
        warn!(job_id = %id, "id space exhausted above the last id, reusing a free slot");
        id
    }
}
