//! The `quizdesk init` command.

use std::path::Path;

use anyhow::{Context, Result};

use quizdesk_core::config::{QuizdeskConfig, CONFIG_FILE_NAME};
use quizdesk_core::model::Quiz;
use quizdesk_core::store::QuizStore;

pub fn execute(config: &QuizdeskConfig) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
    } else {
        std::fs::write(config_path, SAMPLE_CONFIG)
            .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
        println!("Created {CONFIG_FILE_NAME}");
    }

    let mut store = QuizStore::open(&config.quiz_dir)?;
    std::fs::create_dir_all(&config.report_dir).with_context(|| {
        format!(
            "failed to create report directory: {}",
            config.report_dir.display()
        )
    })?;

    let sample_path = store.quiz_path(SAMPLE_QUIZ_NAME);
    if sample_path.exists() {
        println!("{} already exists, skipping.", sample_path.display());
    } else {
        let mut quiz = Quiz::new(SAMPLE_QUIZ_NAME);
        for (question, answer) in SAMPLE_QUESTIONS {
            quiz.insert(*question, *answer);
        }
        let path = store.add_quiz(quiz)?;
        println!("Created {}", path.display());
    }

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to set the teacher roster");
    println!("  2. Run: quizdesk");
    println!("  3. Log in as a teacher to add quizzes, or as a student to take one");

    Ok(())
}

const SAMPLE_QUIZ_NAME: &str = "sample";

const SAMPLE_QUESTIONS: &[(&str, &str)] = &[
    ("What is the capital of France?", "Paris"),
    ("How many continents are there?", "7"),
    ("What is the chemical symbol for gold?", "Au"),
    ("Which planet is known as the Red Planet?", "Mars"),
    ("What is 12 x 12?", "144"),
    ("Who wrote \"Hamlet\"?", "Shakespeare"),
];

const SAMPLE_CONFIG: &str = r#"# quizdesk configuration

quiz_dir = "quizzes"
report_dir = "reports"

# Questions asked per attempt.
rounds = 5

# "rounds": Total Marks is always the round count.
# "asked":  Total Marks is the number of questions actually asked.
score_basis = "rounds"

teachers = ["teacher1", "teacher2"]
"#;
