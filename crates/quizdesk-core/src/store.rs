//! Quiz store: loads quiz CSV files from a directory and persists new ones.
//!
//! A quiz file has a `Question,Answer` header followed by one record per
//! question. Fields are written quoted, so questions and answers may contain
//! commas and double quotes.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::QuizError;
use crate::model::Quiz;

/// File extension of quiz files.
pub const QUIZ_EXTENSION: &str = "csv";

const QUIZ_HEADER: &str = "Question,Answer\n";

/// A quiz file that could not be read during [`QuizStore::load_all`].
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// All quizzes known to this process, keyed by name.
#[derive(Debug)]
pub struct QuizStore {
    dir: PathBuf,
    quizzes: HashMap<String, Quiz>,
    failures: Vec<LoadFailure>,
}

impl QuizStore {
    /// Create the quiz directory if needed and load everything in it.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create quiz directory: {}", dir.display()))?;
        Self::load_all(dir)
    }

    /// Load every `*.csv` file in `dir` as a quiz.
    ///
    /// A file that cannot be read is recorded in [`QuizStore::failures`] and
    /// left out; the others still load.
    pub fn load_all(dir: &Path) -> Result<Self> {
        let mut quizzes = HashMap::new();
        let mut failures = Vec::new();

        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("failed to read quiz directory: {}", dir.display()))?
        {
            let path = entry?.path();
            if path.is_dir() || !path.extension().is_some_and(|ext| ext == QUIZ_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("skipping quiz file with non UTF-8 name: {}", path.display());
                continue;
            };

            match read_quiz_file(&path, name) {
                Ok(quiz) => {
                    tracing::debug!("loaded quiz '{}' ({} questions)", quiz.name, quiz.len());
                    quizzes.insert(quiz.name.clone(), quiz);
                }
                Err(error) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), error);
                    failures.push(LoadFailure { path, error });
                }
            }
        }

        tracing::info!("loaded {} quizzes from {}", quizzes.len(), dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            quizzes,
            failures,
        })
    }

    /// Directory quiz files live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files that failed to load.
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Quiz names in the order they are offered to users.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.quizzes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, name: &str) -> Option<&Quiz> {
        self.quizzes.get(name)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Path of the file backing the quiz `name`.
    pub fn quiz_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{QUIZ_EXTENSION}"))
    }

    /// Store a quiz, replacing any quiz with the same name, and write it to
    /// a fresh file.
    ///
    /// The in-memory copy is kept even when writing the file fails.
    pub fn add_quiz(&mut self, quiz: Quiz) -> Result<PathBuf> {
        validate_quiz_name(&quiz.name)?;

        let path = self.quiz_path(&quiz.name);
        let name = quiz.name.clone();
        self.quizzes.insert(name.clone(), quiz);

        let file = File::create(&path)
            .with_context(|| format!("failed to create quiz file: {}", path.display()))?;
        write_quiz(&self.quizzes[&name], file)
            .with_context(|| format!("failed to write quiz file: {}", path.display()))?;

        tracing::info!("saved quiz '{}' to {}", name, path.display());
        Ok(path)
    }
}

/// Reject names that are empty, padded with whitespace, or would leave the
/// quiz directory.
pub fn validate_quiz_name(name: &str) -> Result<(), QuizError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name.contains(|c: char| c == '/' || c == '\\')
        || name == "."
        || name == ".."
    {
        return Err(QuizError::InvalidQuizName(name.to_string()));
    }
    Ok(())
}

/// Read a single quiz file.
pub fn read_quiz_file(path: &Path, name: &str) -> Result<Quiz> {
    let file = File::open(path)
        .with_context(|| format!("failed to open quiz file: {}", path.display()))?;
    parse_quiz(name, file)
}

/// Parse quiz CSV data.
///
/// The first record is the header and is ignored. Records without exactly
/// two fields are skipped; a later duplicate question replaces the earlier one.
pub fn parse_quiz<R: Read>(name: &str, reader: R) -> Result<Quiz> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut quiz = Quiz::new(name);
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e).context("failed to read quiz data"),
            Err(e) => {
                tracing::debug!("skipping malformed record in quiz '{}': {}", name, e);
                continue;
            }
        };
        if record.len() != 2 {
            tracing::debug!(
                "skipping record with {} fields in quiz '{}'",
                record.len(),
                name
            );
            continue;
        }
        quiz.insert(&record[0], &record[1]);
    }

    Ok(quiz)
}

/// Write a quiz as CSV: header line, then one quoted record per question.
pub fn write_quiz<W: Write>(quiz: &Quiz, mut writer: W) -> Result<()> {
    writer.write_all(QUIZ_HEADER.as_bytes())?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    let mut questions: Vec<(&String, &String)> = quiz.questions.iter().collect();
    questions.sort_unstable();
    for (question, answer) in questions {
        csv_writer.write_record([question, answer])?;
    }
    csv_writer.flush()?;
    Ok(())
}
