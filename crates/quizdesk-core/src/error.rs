//! Domain error types.
//!
//! Filesystem and CSV failures are carried as `anyhow` errors with context;
//! these variants cover the cases callers need to tell apart.

use thiserror::Error;

/// Errors raised by quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A 1-based menu choice was not a number or fell outside the list.
    #[error("invalid choice '{input}', expected a number from 1 to {max}")]
    InvalidChoice { input: String, max: usize },

    /// There was nothing to choose from.
    #[error("nothing to choose from")]
    EmptyChoice,

    /// The quiz name cannot be used as a file name.
    #[error("invalid quiz name: '{0}'")]
    InvalidQuizName(String),

    /// The configured round count is zero.
    #[error("rounds must be at least 1")]
    InvalidRounds,
}
