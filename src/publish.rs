use std::collections::HashMap;
use std::io::{BufRead, Write};

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::client::SheetAppender;
use crate::constants::SHEET_COLUMNS;
use crate::dates::format_date;
use crate::error::{ErrorContext, ReportResult};
use crate::logging::{log_error, log_info};
use crate::models::{PointsByTeam, TypePoints};

pub trait HeadcountSource {
    /// `Ok(None)` leaves the cell empty.
    fn headcount(&mut self, team: &str) -> ReportResult<Option<u32>>;
}

#[derive(Debug, Default, Clone)]
pub struct FixedHeadcounts {
    counts: HashMap<String, u32>,
}

impl FixedHeadcounts {
    pub fn new(counts: HashMap<String, u32>) -> Self {
        Self { counts }
    }
}

impl HeadcountSource for FixedHeadcounts {
    fn headcount(&mut self, team: &str) -> ReportResult<Option<u32>> {
        Ok(self.counts.get(team).copied())
    }
}

pub struct PromptHeadcount<R, W> {
    known: HashMap<String, u32>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptHeadcount<R, W> {
    pub fn new(known: HashMap<String, u32>, input: R, output: W) -> Self {
        Self { known, input, output }
    }
}

impl<R: BufRead, W: Write> HeadcountSource for PromptHeadcount<R, W> {
    fn headcount(&mut self, team: &str) -> ReportResult<Option<u32>> {
        if let Some(count) = self.known.get(team) {
            return Ok(Some(*count));
        }

        loop {
            write!(self.output, "How many members did {} have? (blank to skip) ", team)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .with_context(|| format!("Reading headcount for {}", team))?;
            if read == 0 {
                return Ok(None);
            }

            let answer = line.trim();
            if answer.is_empty() {
                return Ok(None);
            }

            match answer.parse::<u32>() {
                Ok(count) => return Ok(Some(count)),
                Err(_) => writeln!(self.output, "'{}' is not a whole number, try again.", answer)?,
            }
        }
    }
}

/// Names with anything beyond letters, digits and underscores are quoted.
pub fn sheet_range(team: &str) -> String {
    if team.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        format!("{}!{}", team, SHEET_COLUMNS)
    } else {
        format!("'{}'!{}", team.replace('\'', "''"), SHEET_COLUMNS)
    }
}

pub fn summary_row(source_label: &str, end: NaiveDate, points: &TypePoints, headcount: Option<u32>) -> Vec<Value> {
    vec![
        json!(source_label),
        json!(format_date(end)),
        json!(points.feature),
        json!(points.chore),
        json!(points.bug),
        headcount.map(|c| json!(c)).unwrap_or_else(|| json!("")),
    ]
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PublishReport {
    pub appended: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl PublishReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A failed append is recorded and the remaining teams are still written.
/// Headcount errors abort the run.
pub async fn publish_points<S, H>(
    sheets: &S,
    headcounts: &mut H,
    source_label: &str,
    end: NaiveDate,
    points: &PointsByTeam,
) -> ReportResult<PublishReport>
where
    S: SheetAppender,
    H: HeadcountSource,
{
    let mut report = PublishReport::default();

    for entry in points.iter() {
        let headcount = headcounts.headcount(&entry.team)?;
        let range = sheet_range(&entry.team);
        let row = summary_row(source_label, end, &entry.points, headcount);

        match sheets.append_row(&range, &row).await {
            Ok(()) => {
                log_info(&format!("Appended row to {}", range));
                report.appended.push(entry.team.clone());
            }
            Err(e) => {
                log_error(&format!("Failed to append row to {}: {}", range, e));
                report.failed.push((entry.team.clone(), e.to_string()));
            }
        }
    }

    Ok(report)
}
