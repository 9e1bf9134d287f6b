//! Core data model types for quizdesk.
//!
//! Quizzes, scores, and the rows appended to per-quiz reports.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Default number of questions presented per session.
pub const DEFAULT_ROUNDS: u32 = 5;

/// A named collection of question/answer pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    /// Quiz name, also the base name of its file.
    pub name: String,
    /// Question text mapped to the expected answer.
    pub questions: HashMap<String, String>,
}

impl Quiz {
    /// Create an empty quiz.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: HashMap::new(),
        }
    }

    /// Add a question, replacing the answer of an existing one.
    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) -> Option<String> {
        self.questions.insert(question.into(), answer.into())
    }

    /// The expected answer for a question.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.questions.get(question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Which number a session reports as its total marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBasis {
    /// Always the configured round count, even when fewer questions were asked.
    #[default]
    Rounds,
    /// The number of questions actually asked.
    Asked,
}

/// Marks obtained out of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub obtained: u32,
    pub total: u32,
}

impl Score {
    /// Percentage in the range 0..=100. A zero total scores 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.obtained as f64 / self.total as f64
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.obtained, self.total)
    }
}

/// Format a percentage the way report files store it, e.g. `60.00%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// One student attempt as stored in a report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Student Name")]
    pub student: String,
    #[serde(rename = "Marks Obtained")]
    pub obtained: u32,
    #[serde(rename = "Total Marks")]
    pub total: u32,
    #[serde(rename = "Percentage")]
    pub percentage: String,
}

impl ReportRow {
    pub fn new(student: impl Into<String>, score: Score) -> Self {
        Self {
            student: student.into(),
            obtained: score.obtained,
            total: score.total,
            percentage: format_percentage(score.percentage()),
        }
    }

    /// Rebuild a row from raw report fields. Returns `None` for rows that
    /// don't have four fields or whose numbers don't parse.
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        let [student, obtained, total, percentage] = fields else {
            return None;
        };
        Some(Self {
            student: student.clone(),
            obtained: obtained.trim().parse().ok()?,
            total: total.trim().parse().ok()?,
            percentage: percentage.clone(),
        })
    }

    /// The percentage as a number, recomputed from the marks when the stored
    /// text is unreadable.
    pub fn percentage_value(&self) -> f64 {
        self.percentage
            .trim()
            .trim_end_matches('%')
            .parse()
            .unwrap_or_else(|_| {
                Score {
                    obtained: self.obtained,
                    total: self.total,
                }
                .percentage()
            })
    }
}

/// Resolve a 1-based menu choice against a list of `len` items.
///
/// Returns the 0-based index.
pub fn parse_choice(input: &str, len: usize) -> Result<usize, QuizError> {
    if len == 0 {
        return Err(QuizError::EmptyChoice);
    }
    let invalid = || QuizError::InvalidChoice {
        input: input.to_string(),
        max: len,
    };
    let choice: usize = input.trim().parse().map_err(|_| invalid())?;
    if choice < 1 || choice > len {
        return Err(invalid());
    }
    Ok(choice - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_formatting() {
        let score = Score {
            obtained: 3,
            total: 5,
        };
        assert_eq!(format_percentage(score.percentage()), "60.00%");
        assert_eq!(score.to_string(), "3/5");

        let third = Score {
            obtained: 1,
            total: 3,
        };
        assert_eq!(format_percentage(third.percentage()), "33.33%");
    }

    #[test]
    fn zero_total_scores_zero() {
        let score = Score {
            obtained: 0,
            total: 0,
        };
        assert_eq!(score.percentage(), 0.0);
    }

    #[test]
    fn report_row_from_score() {
        let row = ReportRow::new(
            "Alice",
            Score {
                obtained: 4,
                total: 5,
            },
        );
        assert_eq!(row.percentage, "80.00%");
        assert_eq!(row.percentage_value(), 80.0);
    }

    #[test]
    fn report_row_from_fields() {
        let fields: Vec<String> = ["Bob", "2", "5", "40.00%"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = ReportRow::from_fields(&fields).unwrap();
        assert_eq!(row.student, "Bob");
        assert_eq!(row.obtained, 2);
        assert_eq!(row.total, 5);

        assert!(ReportRow::from_fields(&fields[..3]).is_none());
        let bad: Vec<String> = ["Bob", "two", "5", "40%"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(ReportRow::from_fields(&bad).is_none());
    }

    #[test]
    fn unreadable_percentage_is_recomputed() {
        let row = ReportRow {
            student: "Eve".into(),
            obtained: 1,
            total: 4,
            percentage: "n/a".into(),
        };
        assert_eq!(row.percentage_value(), 25.0);
    }

    #[test]
    fn choice_bounds() {
        assert_eq!(parse_choice("1", 3).unwrap(), 0);
        assert_eq!(parse_choice(" 3 ", 3).unwrap(), 2);
        assert!(matches!(
            parse_choice("0", 3),
            Err(QuizError::InvalidChoice { .. })
        ));
        assert!(matches!(
            parse_choice("4", 3),
            Err(QuizError::InvalidChoice { .. })
        ));
        assert!(matches!(
            parse_choice("abc", 3),
            Err(QuizError::InvalidChoice { .. })
        ));
        assert!(matches!(parse_choice("1", 0), Err(QuizError::EmptyChoice)));
    }
}
