//! Teacher flow: author quizzes and view score reports.

use std::io::{BufRead, Write};

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizdesk_core::model::{format_percentage, Quiz};
use quizdesk_core::report::{ReportTable, STATISTICS_MARKER};
use quizdesk_core::store::validate_quiz_name;

use super::{pick, Desk};
use crate::console::Console;

/// Entering this instead of a question ends authoring. Case-insensitive.
pub const DONE_TOKEN: &str = "done";

pub fn handle<R: BufRead, W: Write>(desk: &mut Desk, console: &mut Console<R, W>) -> Result<()> {
    console.say("Teacher Authentication")?;
    let Some(name) = console.ask("Enter your name:")? else {
        return Ok(());
    };

    if !desk.config.is_teacher(&name) {
        tracing::debug!("rejected teacher name '{name}'");
        console.say("Unauthorized access.")?;
        return Ok(());
    }
    console.say("Teacher authenticated.")?;

    let Some(action) = console.ask("Would you like to add questions or view quiz reports? (add/view)")?
    else {
        return Ok(());
    };
    match action.to_lowercase().as_str() {
        "add" => add_questions(desk, console),
        "view" => view_reports(desk, console),
        _ => {
            console.say("Invalid option. Please enter 'add' or 'view'.")?;
            Ok(())
        }
    }
}

/// Collect question/answer pairs until [`DONE_TOKEN`] and save them as a quiz,
/// replacing any quiz of the same name.
pub fn add_questions<R: BufRead, W: Write>(
    desk: &mut Desk,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("Add Questions")?;
    let Some(quiz_name) = console.ask("Enter the quiz name:")? else {
        return Ok(());
    };
    if let Err(e) = validate_quiz_name(&quiz_name) {
        console.say(format!("Error saving quiz: {e}"))?;
        return Ok(());
    }

    let mut quiz = Quiz::new(quiz_name);
    console.say(format!(
        "Enter questions and answers. Type '{DONE_TOKEN}' when finished."
    ))?;
    loop {
        let Some(question) = console.ask("Enter a question:")? else {
            break;
        };
        if question.eq_ignore_ascii_case(DONE_TOKEN) {
            break;
        }
        let Some(answer) = console.ask("Enter the answer:")? else {
            break;
        };
        quiz.insert(question, answer);
    }

    let quiz_name = quiz.name.clone();
    let count = quiz.len();
    match desk.store.add_quiz(quiz) {
        Ok(path) => {
            tracing::debug!("{count} questions written to {}", path.display());
            console.say(format!("Questions added and saved to quiz: {quiz_name}"))?;
        }
        Err(e) => console.say(format!("Error saving quiz: {e:#}"))?,
    }
    Ok(())
}

/// List reports, let the teacher pick one, and print it with its statistics.
pub fn view_reports<R: BufRead, W: Write>(desk: &Desk, console: &mut Console<R, W>) -> Result<()> {
    let quizzes = match desk.reports.list() {
        Ok(quizzes) => quizzes,
        Err(e) => {
            console.say(format!("Error reading reports: {e:#}"))?;
            return Ok(());
        }
    };
    if quizzes.is_empty() {
        console.say("No saved reports available.")?;
        return Ok(());
    }

    console.say("Saved Reports:")?;
    for (i, quiz) in quizzes.iter().enumerate() {
        console.say(format!("{}. {}", i + 1, quiz))?;
    }
    console.say("Select a report to view:")?;
    let Some(index) = pick(console, quizzes.len())? else {
        return Ok(());
    };

    let quiz = &quizzes[index];
    let path = desk.reports.path_for(quiz);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    console.say(format!("Viewing report: {file_name}"))?;

    let table = match desk.reports.read(quiz) {
        Ok(table) => table,
        Err(e) => {
            console.say(format!("Error reading report file: {e:#}"))?;
            return Ok(());
        }
    };
    if table.is_empty() {
        console.say("Report is empty.")?;
        return Ok(());
    }

    console.say(render_table(&table))?;

    if let Some(stats) = table.statistics() {
        console.say("")?;
        console.say(format!("{STATISTICS_MARKER}:"))?;
        console.say(format!("  Attempts:      {}", stats.attempts))?;
        console.say(format!("  Average marks: {:.2}", stats.average_marks))?;
        console.say(format!("  Average:       {}", format_percentage(stats.average)))?;
        console.say(format!("  Highest:       {}", format_percentage(stats.best)))?;
        console.say(format!("  Lowest:        {}", format_percentage(stats.worst)))?;
    }

    Ok(())
}

fn render_table(report: &ReportTable) -> Table {
    let mut table = Table::new();
    table.set_header(report.header.iter().map(Cell::new));
    for row in &report.rows {
        table.add_row(row.iter().map(Cell::new));
    }
    table
}
