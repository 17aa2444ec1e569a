//! jobboard
//!
//! Terminal front end for the job tracking board.
//!
//! ## Usage
//!
//! ```bash
//! jobboard add --title "Logo render" --priority high --require render,video
//! jobboard update 1772400000000 --status "in progress"
//! jobboard board
//! jobboard shell
//! ```

mod error;
mod prompt;
mod render;
mod shell;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use jobboard::board::{DraftEdit, FixedAnswer, Outcome};
use jobboard::persistence::export_json;
use jobboard::{
    load_or_default, logging, BoardConfig, Dashboard, Database, JobChanges, JobId, KeyValueStore, MemoryStore,
    PersistenceBridge, Priority, Prompter, Requirement, Status,
};

use crate::error::{CliError, CliResult};
use crate::prompt::TerminalPrompter;

type Board = Dashboard<Box<dyn KeyValueStore>>;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Track jobs across Not Started, In Progress and Completed", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to <config dir>/jobboard/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// SQLite database file (overrides the config)
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Keep the board in memory only; nothing is written
    #[arg(long, global = true, conflicts_with = "database")]
    ephemeral: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board (the default)
    Board {
        /// Print the board view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a job
    Add(AddArgs),

    /// Change fields of an existing job
    Update(UpdateArgs),

    /// Delete a job
    Delete {
        #[arg(value_name = "ID")]
        id: JobId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the summary statistics
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// Write all jobs as JSON to a file, or stdout when no path is given
    Export {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Replace all jobs with the contents of an exported file
    Import {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Interactive session
    Shell,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    title: String,

    #[arg(long)]
    description: Option<String>,

    /// e.g. "ultra high", "moderate", "not specified"
    #[arg(long)]
    priority: Option<Priority>,

    /// e.g. "not started", "in progress", "completed"
    #[arg(long)]
    status: Option<Status>,

    /// Comma-separated deliverables: render, orthographic, drawing, step,
    /// prototype, video, brochure
    #[arg(long, value_delimiter = ',')]
    require: Vec<Requirement>,

    /// Image file to preview for this session
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    #[arg(long)]
    comments: Option<String>,
}

#[derive(Args)]
struct UpdateArgs {
    #[arg(value_name = "ID")]
    id: JobId,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    status: Option<Status>,

    #[arg(long)]
    priority: Option<Priority>,

    #[arg(long)]
    comments: Option<String>,

    /// Completion date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with = "clear_complete")]
    complete: Option<NaiveDate>,

    /// Remove the completion date
    #[arg(long)]
    clear_complete: bool,

    /// Deliverables to switch on
    #[arg(long, value_delimiter = ',')]
    require: Vec<Requirement>,

    /// Deliverables to switch off
    #[arg(long, value_delimiter = ',')]
    drop_require: Vec<Requirement>,

    /// Image file to preview for this session
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = load_settings(&cli)?;

    let storage: Box<dyn KeyValueStore> = if cli.ephemeral {
        tracing::debug!("Using in-memory storage");
        Box::new(MemoryStore::new())
    } else {
        let path = cli
            .database
            .or_else(|| config.resolved_database_path())
            .ok_or(CliError::NoDatabasePath)?;
        Box::new(Database::open(&path)?)
    };

    let mut board = Dashboard::open(PersistenceBridge::with_key(
        storage,
        config.storage_key.clone(),
    ));

    match cli.command.unwrap_or(Commands::Board { json: false }) {
        Commands::Board { json } => print_board(&board, json),
        Commands::Add(args) => run_add(&mut board, args),
        Commands::Update(args) => run_update(&mut board, args),
        Commands::Delete { id, yes } => {
            if yes {
                run_delete(&mut board, id, &FixedAnswer(true))
            } else {
                run_delete(&mut board, id, &TerminalPrompter::new())
            }
        }
        Commands::Summary { json } => {
            let summary = board.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                render::print_summary(&summary);
            }
            Ok(())
        }
        Commands::Export { path } => run_export(&board, path),
        Commands::Import { path } => {
            let jobs = board.persistence().import_from(&path)?;
            let count = jobs.len();
            board.import(jobs);
            println!("{} {} jobs from {}", "Imported".green(), count, path.display());
            Ok(())
        }
        Commands::Shell => shell::run(&mut board),
    }
}

/// Loads the config and installs logging from it.
fn load_settings(cli: &Cli) -> jobboard::Result<BoardConfig> {
    let config = load_or_default(cli.config.as_deref())?;
    logging::init_logging(&config.logging, cli.verbose)?;
    Ok(config)
}

fn print_board(board: &Board, json: bool) -> CliResult<()> {
    let view = board.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_board(&view);
    }
    Ok(())
}

fn run_add(board: &mut Board, args: AddArgs) -> CliResult<()> {
    board.edit_draft(DraftEdit::Title(args.title));
    if let Some(description) = args.description {
        board.edit_draft(DraftEdit::Description(description));
    }
    if let Some(priority) = args.priority {
        board.edit_draft(DraftEdit::Priority(priority));
    }
    if let Some(status) = args.status {
        board.edit_draft(DraftEdit::Status(status));
    }
    for requirement in args.require {
        board.edit_draft(DraftEdit::Requirement(requirement, true));
    }
    if let Some(path) = args.image {
        board.edit_draft(DraftEdit::Image(path));
    }
    if let Some(comments) = args.comments {
        board.edit_draft(DraftEdit::Comments(comments));
    }

    let id = board.try_submit_draft()?;
    println!("{} job {}", "Added".green(), id);
    Ok(())
}

fn run_update(board: &mut Board, args: UpdateArgs) -> CliResult<()> {
    let id = args.id;
    let current = board.store().get(id).ok_or(CliError::NotFound(id))?;

    let mut changes = JobChanges::new();
    if let Some(title) = args.title {
        changes = changes.title(title);
    }
    if let Some(description) = args.description {
        changes = changes.description(description);
    }
    if let Some(status) = args.status {
        changes = changes.status(status);
    }
    if let Some(priority) = args.priority {
        changes = changes.priority(priority);
    }
    if let Some(comments) = args.comments {
        changes = changes.comments(comments);
    }
    if let Some(date) = args.complete {
        changes = changes.date_complete(Some(date));
    } else if args.clear_complete {
        changes = changes.date_complete(None);
    }
    if !args.require.is_empty() || !args.drop_require.is_empty() {
        let mut requirements = current.requirements;
        for requirement in args.require {
            requirements.set(requirement, true);
        }
        for requirement in args.drop_require {
            requirements.set(requirement, false);
        }
        changes = changes.requirements(requirements);
    }

    if !changes.is_empty() {
        if let Outcome::NotFound(id) = board.update_job(id, changes) {
            return Err(CliError::NotFound(id));
        }
    }
    if let Some(path) = args.image {
        if let Outcome::NotFound(id) = board.attach_image(id, &path) {
            return Err(CliError::NotFound(id));
        }
    }

    println!("{} job {}", "Updated".green(), id);
    Ok(())
}

fn run_delete(board: &mut Board, id: JobId, prompter: &dyn Prompter) -> CliResult<()> {
    if !board.store().contains(id) {
        return Err(CliError::NotFound(id));
    }
    match board.delete_job(id, prompter) {
        Outcome::Deleted(id) => println!("{} job {}", "Deleted".green(), id),
        Outcome::Cancelled => println!("{}", "Deletion cancelled".yellow()),
        Outcome::NotFound(id) => return Err(CliError::NotFound(id)),
        other => tracing::debug!(?other, "unexpected delete outcome"),
    }
    Ok(())
}

fn run_export(board: &Board, path: Option<PathBuf>) -> CliResult<()> {
    match path {
        Some(path) => {
            board.export_to(&path)?;
            println!(
                "{} {} jobs to {}",
                "Exported".green(),
                board.jobs().len(),
                path.display()
            );
        }
        None => println!("{}", export_json(board.store())?),
    }
    Ok(())
}
