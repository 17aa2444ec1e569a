//! The dashboard: owned application state and intent dispatch.
//!
//! Every store mutation follows the same sequence: mutate the [`JobStore`],
//! write the full collection through the [`PersistenceBridge`], then publish
//! a [`BoardEvent`]. Draft and active-job changes are session state and are
//! never written.

use std::path::Path;

use tokio::sync::broadcast;
use tracing::{debug, error, info, info_span};

use super::intent::{DraftEdit, Intent, Outcome};
use super::preview::PreviewRegistry;
use super::prompt::{Prompter, DELETE_CONFIRMATION};
use super::view::{render_board, BoardView};
use crate::broadcast::{BoardEvent, BoardEvents};
use crate::error::{StorageError, ValidationError};
use crate::model::{Job, JobChanges, JobDraft, JobId};
use crate::persistence::{KeyValueStore, PersistenceBridge};
use crate::store::{Clock, JobStore, Summary, SystemClock};

pub struct Dashboard<S, C = SystemClock> {
    store: JobStore,
    draft: JobDraft,
    active: Option<JobId>,
    persistence: PersistenceBridge<S>,
    previews: PreviewRegistry,
    events: BoardEvents,
    clock: C,
}

impl<S: KeyValueStore> Dashboard<S, SystemClock> {
    /// Opens the dashboard against `persistence` using the wall clock.
    pub fn open(persistence: PersistenceBridge<S>) -> Self {
        Self::open_with_clock(persistence, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> Dashboard<S, C> {
    /// Loads the stored collection (empty on any failure) and starts a
    /// fresh session.
    pub fn open_with_clock(persistence: PersistenceBridge<S>, clock: C) -> Self {
        let store = persistence.load();
        info!(jobs = store.len(), key = persistence.key(), "Dashboard opened");
        Self {
            store,
            draft: JobDraft::default(),
            active: None,
            persistence,
            previews: PreviewRegistry::new(),
            events: BoardEvents::default(),
            clock,
        }
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn jobs(&self) -> &[Job] {
        self.store.jobs()
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn persistence(&self) -> &PersistenceBridge<S> {
        &self.persistence
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// The selected job, or `None` if nothing is selected or the selection
    /// points at a deleted job.
    pub fn active_job(&self) -> Option<&Job> {
        self.active.and_then(|id| self.store.get(id))
    }

    pub fn summary(&self) -> Summary {
        self.store.summary()
    }

    pub fn view(&self) -> BoardView {
        render_board(&self.store, &self.draft, self.active, &self.previews)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    /// Applies one user intent.
    pub fn apply(&mut self, intent: Intent, prompter: &dyn Prompter) -> Outcome {
        let _span = info_span!("dashboard.apply").entered();
        match intent {
            Intent::EditDraft(edit) => {
                self.edit_draft(edit);
                Outcome::DraftEdited
            }
            Intent::SubmitDraft => self.submit_draft(prompter),
            Intent::UpdateJob { id, changes } => self.update_job(id, changes),
            Intent::AttachImage { id, path } => self.attach_image(id, &path),
            Intent::SetActive(id) => self.set_active(id),
            Intent::ClearActive => {
                self.active = None;
                self.events.send(BoardEvent::ActiveChanged { id: None });
                Outcome::ActiveChanged(None)
            }
            Intent::DeleteJob(id) => self.delete_job(id, prompter),
        }
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        let draft = &mut self.draft;
        match edit {
            DraftEdit::Title(title) => draft.title = title,
            DraftEdit::Description(description) => draft.description = description,
            DraftEdit::Priority(priority) => draft.priority = priority,
            DraftEdit::Status(status) => draft.status = status,
            DraftEdit::Requirement(requirement, on) => draft.requirements.set(requirement, on),
            DraftEdit::DateComplete(date) => draft.date_complete = date,
            DraftEdit::Comments(comments) => draft.comments = comments,
            DraftEdit::Image(path) => draft.image = Some(self.previews.register(path)),
            DraftEdit::ClearImage => draft.image = None,
            DraftEdit::Reset => draft.reset(),
        }
        self.events.send(BoardEvent::DraftChanged);
    }

    /// Commits the draft. A blank title raises an alert and changes nothing.
    pub fn submit_draft(&mut self, prompter: &dyn Prompter) -> Outcome {
        match self.try_submit_draft() {
            Ok(id) => Outcome::Added(id),
            Err(e) => {
                prompter.alert(&e.to_string());
                Outcome::Rejected(e)
            }
        }
    }

    /// Commits the draft, returning the validation failure instead of
    /// alerting. The draft is kept on failure.
    pub fn try_submit_draft(&mut self) -> Result<JobId, ValidationError> {
        let mut draft = std::mem::take(&mut self.draft);
        let result = self.add_job(&mut draft);
        self.draft = draft;
        result
    }

    /// Adds a job from `draft` (reset on success), persists, and notifies.
    pub fn add_job(&mut self, draft: &mut JobDraft) -> Result<JobId, ValidationError> {
        let id = self.store.add_job(draft, &self.clock)?.id;
        self.persist();
        self.events.send(BoardEvent::JobAdded { id });
        Ok(id)
    }

    /// Merges `changes` into job `id`. Unknown ids are a silent no-op.
    pub fn update_job(&mut self, id: JobId, changes: JobChanges) -> Outcome {
        if !self.store.update_job(id, changes) {
            return Outcome::NotFound(id);
        }
        self.persist();
        self.events.send(BoardEvent::JobUpdated { id });
        Outcome::Updated(id)
    }

    /// Registers `path` as a preview and attaches it to job `id`.
    pub fn attach_image(&mut self, id: JobId, path: &Path) -> Outcome {
        if !self.store.contains(id) {
            return Outcome::NotFound(id);
        }
        let image = self.previews.register(path);
        self.update_job(id, JobChanges::new().image(Some(image)))
    }

    pub fn set_active(&mut self, id: JobId) -> Outcome {
        if !self.store.contains(id) {
            debug!(job_id = %id, "ignoring selection of unknown job");
            return Outcome::NotFound(id);
        }
        self.active = Some(id);
        self.events.send(BoardEvent::ActiveChanged { id: Some(id) });
        Outcome::ActiveChanged(Some(id))
    }

    /// Deletes job `id` after the user confirms.
    ///
    /// The active selection is left as-is; once its job is gone it reads as
    /// no active job.
    pub fn delete_job(&mut self, id: JobId, prompter: &dyn Prompter) -> Outcome {
        if !prompter.confirm(DELETE_CONFIRMATION) {
            debug!(job_id = %id, "deletion declined");
            return Outcome::Cancelled;
        }
        match self.store.delete_job(id) {
            Some(_) => {
                self.persist();
                self.events.send(BoardEvent::JobDeleted { id });
                Outcome::Deleted(id)
            }
            None => Outcome::NotFound(id),
        }
    }

    /// Replaces the whole collection with `jobs` and persists it.
    pub fn import(&mut self, jobs: Vec<Job>) {
        let count = jobs.len();
        self.store.replace_all(jobs);
        self.persist();
        self.events.send(BoardEvent::Reloaded { count });
    }

    /// Writes the collection as pretty JSON to `path`.
    pub fn export_to(&self, path: &Path) -> Result<(), StorageError> {
        self.persistence.export_to(&self.store, path)
    }

    /// Post-mutation hook. Write failures are logged; in-memory state stays.
    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.store) {
            error!("Failed to persist jobs: {}", e);
        }
    }
}

impl<S, C> std::fmt::Debug for Dashboard<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("jobs", &self.store.len())
            .field("active", &self.active)
            .field("draft", &self.draft)
            .finish()
    }
}
