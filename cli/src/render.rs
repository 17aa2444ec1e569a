//! Colored terminal rendering of the board view.

use colored::{ColoredString, Colorize};
use jobboard::board::{BoardView, ColumnView, DraftView, JobCard, Swatch};
use jobboard::Summary;

fn badge(text: &str, swatch: Swatch) -> ColoredString {
    let (r, g, b) = swatch.rgb;
    format!(" {} ", text).white().bold().on_truecolor(r, g, b)
}

pub fn print_board(view: &BoardView) {
    println!("{}", view.header.title.bold().underline());
    if let Some(active) = &view.header.active_job {
        println!("{} {}", "Active:".dimmed(), active.cyan().bold());
    }
    print_summary(&view.header.summary);
    println!();

    for column in &view.columns {
        print_column(column);
    }
}

fn print_column(column: &ColumnView) {
    let swatch = jobboard::board::status_color(column.status);
    println!(
        "{} {}",
        badge(&column.status.to_string(), swatch),
        format!("({})", column.cards.len()).dimmed()
    );
    if column.cards.is_empty() {
        println!("  {}", "no jobs".dimmed());
    }
    for card in &column.cards {
        print_card(card);
    }
    println!();
}

fn print_card(card: &JobCard) {
    let marker = if card.active { "▶".cyan().bold() } else { " ".normal() };
    println!(
        "{} {} {}  {}",
        marker,
        card.title.bold(),
        badge(card.priority.as_str(), card.priority_color),
        format!("#{}", card.id).dimmed()
    );
    if !card.description.is_empty() {
        println!("    {}", card.description);
    }
    if !card.requirements.is_empty() {
        println!("    {} {}", "needs:".dimmed(), card.requirements.join(", "));
    }

    let mut dates = format!("submitted {}", card.date_submitted);
    if let Some(done) = card.date_complete {
        dates.push_str(&format!(", completed {}", done));
    }
    println!("    {}", dates.dimmed());

    if let Some(image) = &card.image {
        match &image.resolved_path {
            Some(path) => println!("    {} {}", "image:".dimmed(), path),
            None => println!("    {} {}", "image:".dimmed(), "(preview unavailable)".dimmed()),
        }
    }
    if !card.comments.is_empty() {
        println!("    {} {}", "note:".dimmed(), card.comments.italic());
    }
}

pub fn print_summary(summary: &Summary) {
    println!(
        "{} {}  {} {}  {} {}  {} {}",
        "Total".dimmed(),
        summary.total.to_string().bold(),
        "Not started".dimmed(),
        summary.not_started.to_string().red(),
        "In progress".dimmed(),
        summary.in_progress.to_string().yellow(),
        "Completed".dimmed(),
        summary.completed.to_string().green(),
    );
    println!(
        "{} {}  {} {:.1} days",
        "Progress".dimmed(),
        format!("{}%", summary.progress_percent).bold(),
        "Avg turnaround".dimmed(),
        summary.avg_turnaround_days,
    );
}

pub fn print_draft(draft: &DraftView) {
    println!("{}", "New job".bold());
    let title = if draft.title.trim().is_empty() {
        "(no title)".dimmed()
    } else {
        draft.title.normal()
    };
    println!("  title:       {}", title);
    if !draft.description.is_empty() {
        println!("  description: {}", draft.description);
    }
    println!("  priority:    {}", draft.priority);
    if !draft.requirements.is_empty() {
        println!("  needs:       {}", draft.requirements.join(", "));
    }
    if let Some(image) = &draft.image {
        let shown = image
            .resolved_path
            .clone()
            .unwrap_or_else(|| image.reference.as_str().to_string());
        println!("  image:       {}", shown);
    }
}
