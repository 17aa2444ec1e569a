//! Board view model: a pure function of store, draft and active selection.

use chrono::NaiveDate;
use serde::Serialize;

use super::colors::{priority_color, status_color, Swatch};
use super::preview::PreviewRegistry;
use crate::model::{ImageRef, Job, JobDraft, JobId, Priority, Requirement, Status};
use crate::store::{JobStore, Summary};

pub const BOARD_TITLE: &str = "Job Tracker Dashboard";

/// Everything a front end needs to draw the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub header: HeaderView,
    pub draft: DraftView,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub title: &'static str,
    /// Title of the active job, when the selection still points at one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_job: Option<String>,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub status: Status,
    pub cards: Vec<JobCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub priority_color: Swatch,
    pub status: Status,
    pub status_color: Swatch,
    pub requirements: Vec<&'static str>,
    pub date_submitted: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_complete: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    pub comments: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    pub reference: ImageRef,
    /// Local file behind the reference, known only within its session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_path: Option<String>,
}

/// The add-job form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub priority_choices: Vec<Priority>,
    pub requirements: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    pub can_submit: bool,
}

/// Builds the board for the current state.
pub fn render_board(
    store: &JobStore,
    draft: &JobDraft,
    active: Option<JobId>,
    previews: &PreviewRegistry,
) -> BoardView {
    let active_job = active.and_then(|id| store.get(id));

    let columns = store
        .columns()
        .into_iter()
        .map(|(status, jobs)| ColumnView {
            status,
            cards: jobs
                .into_iter()
                .map(|job| job_card(job, active_job.map(|a| a.id), previews))
                .collect(),
        })
        .collect();

    BoardView {
        header: HeaderView {
            title: BOARD_TITLE,
            active_job: active_job.map(|j| j.title.clone()),
            summary: store.summary(),
        },
        draft: draft_view(draft, previews),
        columns,
    }
}

fn job_card(job: &Job, active: Option<JobId>, previews: &PreviewRegistry) -> JobCard {
    JobCard {
        id: job.id,
        title: job.title.clone(),
        description: job.description.clone(),
        priority: job.priority,
        priority_color: priority_color(job.priority),
        status: job.status,
        status_color: status_color(job.status),
        requirements: requirement_names(job.requirements.enabled()),
        date_submitted: job.date_submitted,
        date_complete: job.date_complete,
        image: job.image.as_ref().map(|image| image_view(image, previews)),
        comments: job.comments.clone(),
        active: active == Some(job.id),
    }
}

fn draft_view(draft: &JobDraft, previews: &PreviewRegistry) -> DraftView {
    DraftView {
        title: draft.title.clone(),
        description: draft.description.clone(),
        priority: draft.priority,
        priority_choices: Priority::ALL.to_vec(),
        requirements: requirement_names(draft.requirements.enabled()),
        image: draft.image.as_ref().map(|image| image_view(image, previews)),
        can_submit: !draft.has_blank_title(),
    }
}

fn image_view(image: &ImageRef, previews: &PreviewRegistry) -> ImageView {
    ImageView {
        reference: image.clone(),
        resolved_path: previews
            .resolve(image)
            .map(|p| p.display().to_string()),
    }
}

fn requirement_names(requirements: Vec<Requirement>) -> Vec<&'static str> {
    requirements.iter().map(Requirement::as_str).collect()
}
