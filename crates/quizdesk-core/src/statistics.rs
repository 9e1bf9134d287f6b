//! Cumulative statistics over a quiz report.

use crate::model::ReportRow;

/// Summary of all attempts recorded for one quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStatistics {
    /// Number of attempts.
    pub attempts: usize,
    /// Mean percentage.
    pub average: f64,
    /// Highest percentage.
    pub best: f64,
    /// Lowest percentage.
    pub worst: f64,
    /// Mean marks obtained.
    pub average_marks: f64,
}

impl ReportStatistics {
    /// Compute statistics, or `None` when there are no rows.
    pub fn from_rows(rows: &[ReportRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let percentages: Vec<f64> = rows.iter().map(ReportRow::percentage_value).collect();
        let n = rows.len() as f64;
        let average = percentages.iter().sum::<f64>() / n;
        let best = percentages.iter().copied().fold(f64::MIN, f64::max);
        let worst = percentages.iter().copied().fold(f64::MAX, f64::min);
        let average_marks = rows.iter().map(|r| r.obtained as f64).sum::<f64>() / n;

        Some(Self {
            attempts: rows.len(),
            average,
            best,
            worst,
            average_marks,
        })
    }
}
