//! Student flow: pick a quiz, answer its questions, record the score.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizdesk_core::model::ReportRow;
use quizdesk_core::session::QuizSession;

use super::{pick, Desk};
use crate::console::Console;

pub fn take_quiz<R: BufRead, W: Write>(desk: &Desk, console: &mut Console<R, W>) -> Result<()> {
    console.say("Student Quiz")?;
    let Some(student) = console.ask("Enter your name:")? else {
        return Ok(());
    };

    console.say(format!("Welcome {student}! Select a quiz to take:"))?;
    let names = desk.store.names();
    if names.is_empty() {
        console.say("No quizzes available.")?;
        return Ok(());
    }
    for (i, name) in names.iter().enumerate() {
        console.say(format!("{}. {}", i + 1, name))?;
    }

    let Some(index) = pick(console, names.len())? else {
        return Ok(());
    };
    let Some(quiz) = desk.store.get(names[index]) else {
        console.say("Quiz not found.")?;
        return Ok(());
    };

    console.say(format!("Starting quiz: {}", quiz.name))?;
    let mut session = QuizSession::new(quiz, desk.config.rounds);

    while let Some(prompt) = session.current() {
        let Some(response) = console.ask(format!("Question {}: {}", prompt.number, prompt.question))?
        else {
            console.say("Quiz abandoned. No score recorded.")?;
            return Ok(());
        };
        if let Some(grade) = session.answer(&response) {
            if grade.correct {
                console.say("Correct!")?;
            } else {
                console.say(format!("Incorrect. The correct answer is {}.", grade.expected))?;
            }
        }
    }

    let score = session.score(desk.config.score_basis);
    console.say(format!("{student}'s final score: {score}"))?;

    let row = ReportRow::new(student, score);
    if let Err(e) = desk.reports.append(&quiz.name, &row) {
        console.say(format!("Error writing report file: {e:#}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use quizdesk_core::model::ScoreBasis;

    use super::*;
    use crate::commands::testing::{add_quiz, desk, run_flow};

    #[test]
    fn no_quizzes() {
        let dir = tempfile::tempdir().unwrap();
        let mut desk = desk(dir.path());
        let out = run_flow(&mut desk, "Alice\n", |d, c| take_quiz(d, c));
        assert!(out.contains("Welcome Alice!"));
        assert!(out.contains("No quizzes available."));
    }

    #[test]
    fn out_of_range_choice_starts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut desk = desk(dir.path());
        add_quiz(&mut desk, "algebra", 3);
        add_quiz(&mut desk, "biology", 3);

        for choice in ["0", "3", "two", ""] {
            let out = run_flow(&mut desk, &format!("Alice\n{choice}\n"), |d, c| take_quiz(d, c));
            assert!(out.contains("1. algebra"));
            assert!(out.contains("2. biology"));
            assert!(out.contains("Invalid choice."), "choice {choice:?}");
            assert!(!out.contains("Starting quiz"), "choice {choice:?}");
        }
        assert!(desk.reports.list().unwrap().is_empty());
    }

    #[test]
    fn full_session_records_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut desk = desk(dir.path());
        add_quiz(&mut desk, "arithmetic", 8);

        let out = run_flow(&mut desk, "Alice\n1\nx\nx\nx\nx\nx\n", |d, c| take_quiz(d, c));
        assert!(out.contains("Starting quiz: arithmetic"));
        assert_eq!(out.matches("Incorrect. The correct answer is").count(), 5);
        assert!(out.contains("Question 5:"));
        assert!(!out.contains("Question 6:"));
        assert!(out.contains("Alice's final score: 0/5"));

        let table = desk.reports.read("arithmetic").unwrap();
        assert_eq!(table.rows, vec![vec!["Alice", "0", "5", "0.00%"]]);
    }

    #[test]
    fn short_quiz_keeps_round_denominator() {
        let dir = tempfile::tempdir().unwrap();
        let mut desk = desk(dir.path());
        let mut quiz = quizdesk_core::model::Quiz::new("capitals");
        quiz.insert("Capital of France?", "paris");
        desk.store.add_quiz(quiz).unwrap();

        let out = run_flow(&mut desk, "Bob\n1\nPARIS\n", |d, c| take_quiz(d, c));
        assert!(out.contains("Question 1: Capital of France?"));
        assert!(out.contains("Correct!"));
        assert!(out.contains("Bob's final score: 1/5"));

        let table = desk.reports.read("capitals").unwrap();
        assert_eq!(table.rows, vec![vec!["Bob", "1", "5", "20.00%"]]);
    }

    #[test]
    fn asked_basis_uses_questions_asked() {
        let dir = tempfile::tempdir().unwrap();
        let mut desk = desk(dir.path());
        desk.config.score_basis = ScoreBasis::Asked;
        add_quiz(&mut desk, "tiny", 2);

        let out = run_flow(&mut desk, "Cy\n1\nnope\nnope\n", |d, c| take_quiz(d, c));
        assert!(out.contains("Cy's final score: 0/2"));
    }

    #[test]
    fn abandoned_session_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut desk = desk(dir.path());
        add_quiz(&mut desk, "arithmetic", 5);

        let out = run_flow(&mut desk, "Dee\n1\n1\n", |d, c| take_quiz(d, c));
        assert!(out.contains("Quiz abandoned"));
        assert!(desk.reports.list().unwrap().is_empty());
    }
}
