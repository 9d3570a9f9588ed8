mod context;

pub mod check;
pub mod config;
pub mod months;
pub mod show;
pub mod status;
pub mod times;
pub mod today;
pub mod watch_console;
pub mod watch_tui;

pub use context::HandlerContext;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use waqt_providers::MonthKey;

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", raw))
}

pub fn parse_month(raw: &str) -> Result<MonthKey> {
    raw.trim()
        .parse::<MonthKey>()
        .with_context(|| format!("Invalid month '{}': expected YYYY-MM", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-06-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        let err = parse_date("01/06/2024").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date '01/06/2024': expected YYYY-MM-DD");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-07").unwrap().to_string(), "2024-07");
        assert!(parse_month("2024-13").is_err());
    }
}
