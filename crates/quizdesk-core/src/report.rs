//! Per-quiz score reports.
//!
//! Each quiz has an append-only `<quiz>_report.csv` holding one row per
//! attempt. The header is written when the file is first created.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::ReportRow;
use crate::statistics::ReportStatistics;

/// Suffix appended to the quiz name to form a report file name.
pub const REPORT_SUFFIX: &str = "_report.csv";

/// Header row of every report file.
pub const REPORT_HEADER: [&str; 4] = ["Student Name", "Marks Obtained", "Total Marks", "Percentage"];

/// Lines from this marker onward are not part of the report table.
pub const STATISTICS_MARKER: &str = "Cumulative Statistics";

/// Directory of report files.
#[derive(Debug, Clone)]
pub struct ReportBook {
    dir: PathBuf,
}

impl ReportBook {
    /// Create the report directory if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create report directory: {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Report file for the quiz `quiz`.
    pub fn path_for(&self, quiz: &str) -> PathBuf {
        self.dir.join(format!("{quiz}{REPORT_SUFFIX}"))
    }

    /// Append one attempt to the quiz's report, writing the header first if
    /// the file is new or empty.
    pub fn append(&self, quiz: &str, row: &ReportRow) -> Result<PathBuf> {
        let path = self.path_for(quiz);
        let needs_header = std::fs::metadata(&path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open report file: {}", path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(REPORT_HEADER)?;
        }
        writer
            .serialize(row)
            .with_context(|| format!("failed to write report file: {}", path.display()))?;
        writer.flush()?;

        tracing::info!(
            "recorded {}/{} for '{}' in {}",
            row.obtained,
            row.total,
            row.student,
            path.display()
        );
        Ok(path)
    }

    /// Names of quizzes that have a report, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read report directory: {}", self.dir.display()))?
        {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(quiz) = file_name.strip_suffix(REPORT_SUFFIX) {
                names.push(quiz.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read and parse the report of quiz `quiz`.
    pub fn read(&self, quiz: &str) -> Result<ReportTable> {
        let path = self.path_for(quiz);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read report file: {}", path.display()))?;
        parse_report(&content)
            .with_context(|| format!("failed to parse report file: {}", path.display()))
    }
}

/// A report split into its header and data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Data rows that parse as attempts.
    pub fn records(&self) -> Vec<ReportRow> {
        self.rows
            .iter()
            .filter_map(|fields| ReportRow::from_fields(fields))
            .collect()
    }

    /// Aggregate statistics over all readable rows.
    pub fn statistics(&self) -> Option<ReportStatistics> {
        ReportStatistics::from_rows(&self.records())
    }
}

/// Parse report file contents.
///
/// Everything from a line starting with [`STATISTICS_MARKER`] onward is
/// ignored. Lines after the marker hold summary figures rather than student
/// attempts, and statistics are recomputed from the rows on every view, so
/// reading them back as rows would count them twice. The first remaining
/// record is the header, the rest are rows.
pub fn parse_report(content: &str) -> Result<ReportTable> {
    let table_end = content
        .lines()
        .position(|line| line.starts_with(STATISTICS_MARKER))
        .unwrap_or(usize::MAX);
    let table: String = content
        .lines()
        .take(table_end)
        .flat_map(|line| [line, "\n"])
        .collect();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(table.as_bytes());

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Ok(ReportTable::default()),
    };
    let rows = records
        .map(|record| -> Result<Vec<String>> {
            Ok(record?.iter().map(str::to_string).collect())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReportTable { header, rows })
}
