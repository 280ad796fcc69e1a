use chrono::{Duration, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ReportError, ReportResult};

lazy_static! {
    static ref RELATIVE_DATE: Regex = Regex::new(r"^(\d+)([dwDW])$").unwrap();
}

/// Format a calendar date the way the search API expects it (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an `--end` value: either `YYYY-MM-DD` or an offset before `today`
/// such as `3d` or `2w`.
pub fn parse_end_date(input: &str, today: NaiveDate) -> ReportResult<NaiveDate> {
    let input = input.trim();

    if let Some(caps) = RELATIVE_DATE.captures(input) {
        let amount: i64 = caps[1]
            .parse()
            .map_err(|_| ReportError::InvalidInput(format!("Offset too large: {}", input)))?;
        let offset = match caps[2].to_lowercase().as_str() {
            "w" => Duration::try_weeks(amount),
            _ => Duration::try_days(amount),
        };

        return offset
            .and_then(|offset| today.checked_sub_signed(offset))
            .ok_or_else(|| ReportError::InvalidInput(format!("Offset too large: {}", input)));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        ReportError::InvalidInput(format!(
            "Invalid end date '{}'. Use YYYY-MM-DD or an offset like 3d or 2w",
            input
        ))
    })
}

/// Inclusive completion window used for the story search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The window of `days` days leading up to and including `end`.
    pub fn ending(end: NaiveDate, days: u32) -> ReportResult<Self> {
        let start = end
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| ReportError::InvalidInput(format!("{} days is too far back", days)))?;

        Ok(Self { start, end })
    }

    /// Search clause understood by `search/stories`, e.g. `completed:2018-12-09..2018-12-16`.
    pub fn search_query(&self) -> String {
        format!("completed:{}..{}", format_date(self.start), format_date(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_zero_pads() {
        assert_eq!(format_date(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_date(date(2018, 12, 16)), "2018-12-16");
    }

    #[test]
    fn test_range_search_query() {
        let range = DateRange::ending(date(2018, 12, 16), 7).unwrap();
        assert_eq!(range.start, date(2018, 12, 9));
        assert_eq!(range.search_query(), "completed:2018-12-09..2018-12-16");
    }

    #[test]
    fn test_range_crosses_year_boundary() {
        let range = DateRange::ending(date(2024, 1, 3), 5).unwrap();
        assert_eq!(format_date(range.start), "2023-12-29");
    }

    #[test]
    fn test_zero_days_is_single_day() {
        let range = DateRange::ending(date(2024, 3, 1), 0).unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_parse_end_date_absolute() {
        let today = date(2024, 6, 15);
        assert_eq!(parse_end_date("2024-01-05", today).unwrap(), date(2024, 1, 5));
    }

    #[test]
    fn test_parse_end_date_relative() {
        let today = date(2024, 6, 15);
        assert_eq!(parse_end_date("3d", today).unwrap(), date(2024, 6, 12));
        assert_eq!(parse_end_date("2W", today).unwrap(), date(2024, 6, 1));
        assert_eq!(parse_end_date("0d", today).unwrap(), today);
    }

    #[test]
    fn test_parse_end_date_rejects_garbage() {
        let today = date(2024, 6, 15);
        assert!(matches!(
            parse_end_date("yesterday", today),
            Err(ReportError::InvalidInput(_))
        ));
        assert!(parse_end_date("2024-13-01", today).is_err());
    }
}
