//! Aggregate statistics over a job collection.

use serde::Serialize;

use crate::model::{Job, Status};

/// Header statistics for the board.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Jobs that have entered the board; equal to `total`.
    pub processed: usize,
    /// `round(completed / total * 100)`, 0 for an empty board.
    pub progress_percent: u32,
    /// Mean days from submission to completion over jobs with a completion
    /// date, rounded to one decimal place. 0 when no job qualifies.
    pub avg_turnaround_days: f64,
}

impl Summary {
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::NotStarted => self.not_started,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }
}

/// Computes the board summary. Pure; called on every read.
///
/// Turnaround is taken as-is, so a completion date before the submission
/// date contributes a negative value.
pub fn compute_summary(jobs: &[Job]) -> Summary {
    let mut summary = Summary {
        total: jobs.len(),
        processed: jobs.len(),
        ..Default::default()
    };

    for job in jobs {
        match job.status {
            Status::NotStarted => summary.not_started += 1,
            Status::InProgress => summary.in_progress += 1,
            Status::Completed => summary.completed += 1,
        }
    }

    if summary.total > 0 {
        let ratio = summary.completed as f64 / summary.total as f64;
        summary.progress_percent = (ratio * 100.0).round() as u32;
    }

    let turnarounds: Vec<i64> = jobs.iter().filter_map(Job::turnaround_days).collect();
    if !turnarounds.is_empty() {
        let mean = turnarounds.iter().sum::<i64>() as f64 / turnarounds.len() as f64;
        summary.avg_turnaround_days = round_one_decimal(mean);
    }

    summary
}

/// Ties round away from zero, so the sign never changes the digits.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
