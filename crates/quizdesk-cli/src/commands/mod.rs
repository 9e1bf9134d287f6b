//! Subcommands and the interactive flows they drive.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use quizdesk_core::config::{load_config_from, QuizdeskConfig};
use quizdesk_core::model::parse_choice;
use quizdesk_core::report::ReportBook;
use quizdesk_core::store::QuizStore;

use crate::console::Console;

pub mod init;
pub mod interactive;
pub mod student;
pub mod teacher;

/// Everything an interactive flow operates on.
pub struct Desk {
    pub config: QuizdeskConfig,
    pub store: QuizStore,
    pub reports: ReportBook,
}

impl Desk {
    /// Create both directories if needed and load all quizzes.
    pub fn open(config: QuizdeskConfig) -> Result<Self> {
        let store = QuizStore::open(&config.quiz_dir)?;
        let reports = ReportBook::open(&config.report_dir)?;
        Ok(Self {
            config,
            store,
            reports,
        })
    }
}

/// Load the config file and apply directory overrides from the command line.
pub fn resolve_config(
    config_path: Option<&Path>,
    quiz_dir: Option<PathBuf>,
    report_dir: Option<PathBuf>,
) -> Result<QuizdeskConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(dir) = quiz_dir {
        config.quiz_dir = dir;
    }
    if let Some(dir) = report_dir {
        config.report_dir = dir;
    }
    Ok(config)
}

/// Read a 1-based choice among `len` items.
///
/// Prints `Invalid choice.` and returns `None` for anything out of range or
/// non-numeric; also `None` at end of input.
fn pick<R: BufRead, W: Write>(console: &mut Console<R, W>, len: usize) -> Result<Option<usize>> {
    let Some(input) = console.read_line()? else {
        return Ok(None);
    };
    match parse_choice(&input, len) {
        Ok(index) => Ok(Some(index)),
        Err(e) => {
            tracing::debug!("rejected choice: {e}");
            console.say("Invalid choice.")?;
            Ok(None)
        }
    }
}
