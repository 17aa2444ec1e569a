//! Interactive board session.
//!
//! Every menu choice becomes one [`Intent`]. The board is redrawn whenever
//! the dashboard publishes events, so the screen always shows settled state.

use std::path::PathBuf;

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select};

use jobboard::board::{DraftEdit, Intent, Outcome};
use jobboard::broadcast::drain;
use jobboard::{Clock, Dashboard, Job, JobChanges, JobId, KeyValueStore, Priority, Requirement, Status};

use crate::error::CliResult;
use crate::prompt::TerminalPrompter;
use crate::render;

const MAIN_MENU: [&str; 7] = [
    "New job",
    "Update job",
    "Select active job",
    "Clear active job",
    "Attach image",
    "Delete job",
    "Quit",
];

const DRAFT_MENU: [&str; 11] = [
    "Title",
    "Description",
    "Priority",
    "Status",
    "Requirements",
    "Completion date",
    "Comments",
    "Image",
    "Add job",
    "Clear form",
    "Back",
];

const UPDATE_MENU: [&str; 6] = [
    "Status",
    "Priority",
    "Completion date",
    "Requirements",
    "Comments",
    "Back",
];

pub fn run<S: KeyValueStore, C: Clock>(board: &mut Dashboard<S, C>) -> CliResult<()> {
    let prompter = TerminalPrompter::new();
    let mut events = board.subscribe();
    render::print_board(&board.view());

    loop {
        let choice = Select::with_theme(prompter.theme())
            .with_prompt("Action")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => edit_draft(board, &prompter)?,
            1 => match pick_job(board, &prompter, "Update which job?")? {
                Some(id) => update_job(board, &prompter, id)?,
                None => None,
            },
            2 => pick_job(board, &prompter, "Select which job?")?
                .map(|id| board.apply(Intent::SetActive(id), &prompter)),
            3 => Some(board.apply(Intent::ClearActive, &prompter)),
            4 => match pick_job(board, &prompter, "Attach to which job?")? {
                Some(id) => {
                    let path: String = Input::with_theme(prompter.theme())
                        .with_prompt("Image file")
                        .interact_text()?;
                    Some(board.apply(
                        Intent::AttachImage {
                            id,
                            path: PathBuf::from(path.trim()),
                        },
                        &prompter,
                    ))
                }
                None => None,
            },
            5 => pick_job(board, &prompter, "Delete which job?")?
                .map(|id| board.apply(Intent::DeleteJob(id), &prompter)),
            _ => break,
        };

        if let Some(Outcome::Cancelled) = outcome {
            println!("{}", "Cancelled".yellow());
        }
        if !drain(&mut events).is_empty() {
            println!();
            render::print_board(&board.view());
        }
    }

    Ok(())
}

fn pick_job<S: KeyValueStore, C: Clock>(
    board: &Dashboard<S, C>,
    prompter: &TerminalPrompter,
    prompt: &str,
) -> CliResult<Option<JobId>> {
    if board.jobs().is_empty() {
        println!("{}", "No jobs yet".dimmed());
        return Ok(None);
    }

    let jobs: Vec<&Job> = Status::ALL
        .iter()
        .flat_map(|status| board.store().with_status(*status))
        .collect();
    let items: Vec<String> = jobs
        .iter()
        .map(|job| format!("{} [{}, {}]", job.title, job.status, job.priority))
        .collect();

    let selection = Select::with_theme(prompter.theme())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| jobs[i].id))
}

/// Edits the draft until the user adds the job or goes back.
fn edit_draft<S: KeyValueStore, C: Clock>(
    board: &mut Dashboard<S, C>,
    prompter: &TerminalPrompter,
) -> CliResult<Option<Outcome>> {
    loop {
        render::print_draft(&board.view().draft);
        let choice = Select::with_theme(prompter.theme())
            .with_prompt("Edit")
            .items(&DRAFT_MENU)
            .default(0)
            .interact()?;

        let draft = board.draft();
        let edit = match choice {
            0 => DraftEdit::Title(text(prompter, "Title", &draft.title)?),
            1 => DraftEdit::Description(text(prompter, "Description", &draft.description)?),
            2 => DraftEdit::Priority(choose(prompter, "Priority", &Priority::ALL, draft.priority)?),
            3 => DraftEdit::Status(choose(prompter, "Status", &Status::ALL, draft.status)?),
            4 => {
                let before = draft.requirements;
                let after = requirements(prompter, before)?;
                for requirement in Requirement::ALL {
                    if before.get(requirement) != after.get(requirement) {
                        board.edit_draft(DraftEdit::Requirement(
                            requirement,
                            after.get(requirement),
                        ));
                    }
                }
                continue;
            }
            5 => DraftEdit::DateComplete(date(prompter, draft.date_complete)?),
            6 => DraftEdit::Comments(text(prompter, "Comments", &draft.comments)?),
            7 => {
                let path = text(prompter, "Image file (blank to remove)", "")?;
                if path.trim().is_empty() {
                    DraftEdit::ClearImage
                } else {
                    DraftEdit::Image(PathBuf::from(path.trim()))
                }
            }
            8 => {
                let outcome = board.apply(Intent::SubmitDraft, prompter);
                if matches!(outcome, Outcome::Added(_)) {
                    return Ok(Some(outcome));
                }
                continue;
            }
            9 => DraftEdit::Reset,
            _ => return Ok(None),
        };
        board.apply(Intent::EditDraft(edit), prompter);
    }
}

fn update_job<S: KeyValueStore, C: Clock>(
    board: &mut Dashboard<S, C>,
    prompter: &TerminalPrompter,
    id: JobId,
) -> CliResult<Option<Outcome>> {
    let Some(job) = board.store().get(id) else {
        return Ok(None);
    };

    let changes = match Select::with_theme(prompter.theme())
        .with_prompt(format!("Change {}", job.title))
        .items(&UPDATE_MENU)
        .default(0)
        .interact()?
    {
        0 => JobChanges::new().status(choose(prompter, "Status", &Status::ALL, job.status)?),
        1 => JobChanges::new().priority(choose(
            prompter,
            "Priority",
            &Priority::ALL,
            job.priority,
        )?),
        2 => JobChanges::new().date_complete(date(prompter, job.date_complete)?),
        3 => JobChanges::new().requirements(requirements(prompter, job.requirements)?),
        4 => JobChanges::new().comments(text(prompter, "Comments", &job.comments)?),
        _ => return Ok(None),
    };

    Ok(Some(board.apply(Intent::UpdateJob { id, changes }, prompter)))
}

fn text(prompter: &TerminalPrompter, prompt: &str, initial: &str) -> CliResult<String> {
    Ok(Input::with_theme(prompter.theme())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn choose<T: Copy + PartialEq + std::fmt::Display>(
    prompter: &TerminalPrompter,
    prompt: &str,
    choices: &[T],
    current: T,
) -> CliResult<T> {
    let default = choices.iter().position(|c| *c == current).unwrap_or(0);
    let index = Select::with_theme(prompter.theme())
        .with_prompt(prompt)
        .items(choices)
        .default(default)
        .interact()?;
    Ok(choices[index])
}

fn requirements(
    prompter: &TerminalPrompter,
    current: jobboard::model::Requirements,
) -> CliResult<jobboard::model::Requirements> {
    let checked: Vec<bool> = Requirement::ALL.iter().map(|r| current.get(*r)).collect();
    let picked = MultiSelect::with_theme(prompter.theme())
        .with_prompt("Requirements (space toggles)")
        .items(&Requirement::ALL)
        .defaults(&checked)
        .interact()?;

    let mut requirements = jobboard::model::Requirements::default();
    for index in picked {
        requirements.set(Requirement::ALL[index], true);
    }
    Ok(requirements)
}

/// Reads an optional completion date; blank clears it.
fn date(prompter: &TerminalPrompter, current: Option<NaiveDate>) -> CliResult<Option<NaiveDate>> {
    let initial = current.map(|d| d.to_string()).unwrap_or_default();
    let raw: String = Input::with_theme(prompter.theme())
        .with_prompt("Completion date (YYYY-MM-DD, blank for none)")
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                return Ok(());
            }
            input
                .trim()
                .parse::<NaiveDate>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(raw.parse().ok())
}
