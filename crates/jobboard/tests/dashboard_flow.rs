//! End-to-end board flows over a real SQLite file.

mod common;

use common::{date, TestHarness};

use jobboard::board::{DraftEdit, FixedAnswer, Intent, Outcome, RecordingPrompter};
use jobboard::broadcast::drain;
use jobboard::model::{JobChanges, Priority, Requirement, Status};
use jobboard::BoardEvent;

fn submit(dashboard: &mut common::harness::TestDashboard, title: &str) -> jobboard::JobId {
    dashboard.edit_draft(DraftEdit::Title(title.to_string()));
    match dashboard.submit_draft(&FixedAnswer(true)) {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {:?}", other),
    }
}

#[test]
fn test_logo_render_lifecycle() {
    let harness = TestHarness::at_date(date(2026, 3, 2));
    let mut dashboard = harness.open_dashboard();

    let id = submit(&mut dashboard, "Logo render");
    let summary = dashboard.summary();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.not_started, 1);

    dashboard.update_job(id, JobChanges::new().status(Status::InProgress));
    let summary = dashboard.summary();
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.not_started, 0);

    harness.set_date(date(2026, 3, 5));
    dashboard.update_job(
        id,
        JobChanges::new()
            .status(Status::Completed)
            .date_complete(Some(date(2026, 3, 5))),
    );
    let summary = dashboard.summary();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.avg_turnaround_days, 3.0);
    assert_eq!(summary.progress_percent, 100);

    // Everything above survives a new session.
    let reopened = harness.open_dashboard();
    assert_eq!(reopened.jobs(), dashboard.jobs());
    assert_eq!(reopened.summary(), summary);
}

#[test]
fn test_ids_stay_unique_under_frozen_clock() {
    let harness = TestHarness::new();
    let mut dashboard = harness.open_dashboard();

    let ids: Vec<_> = (0..5)
        .map(|i| submit(&mut dashboard, &format!("job {}", i)))
        .collect();

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 5);
    assert_eq!(sorted, ids);

    // Ids issued after reopening continue past the loaded ones.
    let mut reopened = harness.open_dashboard();
    let next = submit(&mut reopened, "later");
    assert!(next > *ids.last().unwrap());
}

#[test]
fn test_draft_fields_flow_into_job() {
    let harness = TestHarness::new();
    let mut dashboard = harness.open_dashboard();

    for edit in [
        DraftEdit::Title("Bracket".to_string()),
        DraftEdit::Description("steel".to_string()),
        DraftEdit::Priority(Priority::UltraHigh),
        DraftEdit::Status(Status::InProgress),
        DraftEdit::Requirement(Requirement::Drawing, true),
        DraftEdit::Requirement(Requirement::Step, true),
        DraftEdit::Requirement(Requirement::Step, false),
        DraftEdit::Comments("rush".to_string()),
    ] {
        dashboard.apply(Intent::EditDraft(edit), &FixedAnswer(true));
    }
    let view = dashboard.view();
    assert!(view.draft.can_submit);
    assert_eq!(view.draft.requirements, vec!["drawing"]);

    let Outcome::Added(id) = dashboard.apply(Intent::SubmitDraft, &FixedAnswer(true)) else {
        panic!("draft was not added");
    };
    let job = dashboard.store().get(id).unwrap();
    assert_eq!(job.description, "steel");
    assert_eq!(job.priority, Priority::UltraHigh);
    assert_eq!(job.status, Status::InProgress);
    assert!(job.requirements.drawing);
    assert!(!job.requirements.step);
    assert_eq!(job.comments, "rush");
    assert_eq!(job.date_submitted, date(2026, 3, 2));

    let view = dashboard.view();
    assert!(!view.draft.can_submit);
    assert_eq!(view.columns[1].cards[0].id, id);
}

#[test]
fn test_empty_title_is_rejected_with_alert() {
    let harness = TestHarness::new();
    let mut dashboard = harness.open_dashboard();
    let prompter = RecordingPrompter::answering(true);

    let outcome = dashboard.apply(Intent::SubmitDraft, &prompter);
    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert_eq!(prompter.alerts().len(), 1);
    assert!(dashboard.jobs().is_empty());
    assert!(harness.open_dashboard().jobs().is_empty());
}

#[test]
fn test_delete_requires_confirmation() {
    let harness = TestHarness::new();
    let mut dashboard = harness.open_dashboard();
    let keep = submit(&mut dashboard, "keep");
    let drop = submit(&mut dashboard, "drop");
    dashboard.set_active(drop);

    let declined = dashboard.apply(Intent::DeleteJob(drop), &FixedAnswer(false));
    assert_eq!(declined, Outcome::Cancelled);
    assert_eq!(harness.open_dashboard().jobs().len(), 2);

    let accepted = dashboard.apply(Intent::DeleteJob(drop), &FixedAnswer(true));
    assert_eq!(accepted, Outcome::Deleted(drop));
    assert!(dashboard.active_job().is_none());

    let reopened = harness.open_dashboard();
    assert_eq!(reopened.jobs().len(), 1);
    assert_eq!(reopened.jobs()[0].id, keep);
}

#[test]
fn test_observer_sees_one_event_per_intent() {
    let harness = TestHarness::new();
    let mut dashboard = harness.open_dashboard();
    let mut rx = dashboard.subscribe();

    let id = submit(&mut dashboard, "a");
    dashboard.apply(Intent::SetActive(id), &FixedAnswer(true));
    dashboard.apply(Intent::ClearActive, &FixedAnswer(true));
    dashboard.apply(Intent::DeleteJob(id), &FixedAnswer(true));

    let events = drain(&mut rx);
    assert_eq!(
        events,
        vec![
            BoardEvent::DraftChanged,
            BoardEvent::JobAdded { id },
            BoardEvent::ActiveChanged { id: Some(id) },
            BoardEvent::ActiveChanged { id: None },
            BoardEvent::JobDeleted { id },
        ]
    );
    assert_eq!(events.iter().filter(|e| e.is_store_mutation()).count(), 2);
}

#[test]
fn test_boards_under_different_keys_are_independent() {
    let harness = TestHarness::new();
    let mut studio = harness.open_dashboard_with_key("studio");
    submit(&mut studio, "studio job");

    assert!(harness.open_dashboard().jobs().is_empty());
    assert_eq!(harness.open_dashboard_with_key("studio").jobs().len(), 1);
}
