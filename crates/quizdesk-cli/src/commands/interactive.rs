//! The interactive session: banner, role prompt, then the chosen flow.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use quizdesk_core::config::QuizdeskConfig;

use super::{student, teacher, Desk};
use crate::console::Console;

pub fn execute(config: QuizdeskConfig) -> Result<()> {
    let mut desk = Desk::open(config)?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run(&mut desk, &mut console)
}

pub fn run<R: BufRead, W: Write>(desk: &mut Desk, console: &mut Console<R, W>) -> Result<()> {
    console.say("Welcome to the Quiz Competition System!")?;
    for failure in desk.store.failures() {
        console.say(format!(
            "Error reading quiz file {}: {:#}",
            failure.path.display(),
            failure.error
        ))?;
    }

    let Some(role) = console.ask("Enter your role (teacher/student):")? else {
        return Ok(());
    };
    match role.to_lowercase().as_str() {
        "teacher" => teacher::handle(desk, console),
        "student" => student::take_quiz(desk, console),
        _ => {
            console.say("Invalid role. Please enter 'teacher' or 'student'.")?;
            Ok(())
        }
    }
}
