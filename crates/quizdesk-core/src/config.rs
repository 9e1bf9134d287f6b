//! quizdesk configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{ScoreBasis, DEFAULT_ROUNDS};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "quizdesk.toml";

/// Top-level quizdesk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizdeskConfig {
    /// Directory holding quiz files.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
    /// Directory holding report files.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    /// Maximum questions per session.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// What a report's "Total Marks" counts.
    #[serde(default)]
    pub score_basis: ScoreBasis,
    /// Names accepted at the teacher prompt.
    #[serde(default = "default_teachers")]
    pub teachers: Vec<String>,
}

fn default_quiz_dir() -> PathBuf {
    PathBuf::from("quizzes")
}
fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}
fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}
fn default_teachers() -> Vec<String> {
    vec!["teacher1".to_string(), "teacher2".to_string()]
}

impl Default for QuizdeskConfig {
    fn default() -> Self {
        Self {
            quiz_dir: default_quiz_dir(),
            report_dir: default_report_dir(),
            rounds: default_rounds(),
            score_basis: ScoreBasis::default(),
            teachers: default_teachers(),
        }
    }
}

impl QuizdeskConfig {
    /// Check values serde can't.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.rounds == 0 {
            return Err(QuizError::InvalidRounds);
        }
        Ok(())
    }

    /// Whether `name` is on the teacher roster. Exact match.
    pub fn is_teacher(&self, name: &str) -> bool {
        self.teachers.iter().any(|t| t == name)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizdesk.toml` in the current directory
/// 2. `~/.config/quizdesk/config.toml`
///
/// Falls back to defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeskConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizdeskConfig::default(),
    };

    Ok(config)
}

/// Parse and validate a TOML config document.
pub fn parse_config(content: &str) -> Result<QuizdeskConfig> {
    let config: QuizdeskConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdesk"))
}
