//! Period parsing for `--period` filters.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a period into an inclusive date range.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end` (both sides in the same format)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(invalid(p, "start and end must have the same format"));
        }
        let (d1, _) = parse_single(start).map_err(|_| invalid(p, "invalid start"))?;
        let (_, d2) = parse_single(end).map_err(|_| invalid(p, "invalid end"))?;
        if d2 < d1 {
            return Err(invalid(p, "end is before start"));
        }
        return Ok((d1, d2));
    }
    parse_single(p.trim())
}

fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid(p, "invalid month"))?;
            let d2 = month_last_day(d1).ok_or_else(|| invalid(p, "invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid(p, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported period format")),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

fn invalid(p: &str, why: &str) -> AppError {
    AppError::InvalidPeriod(format!("{p}: {why}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_period("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
        assert_eq!(parse_period("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(parse_period("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
        assert_eq!(parse_period("2025-03-01").unwrap(), (d(2025, 3, 1), d(2025, 3, 1)));
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_period("2025-01:2025-03").unwrap(),
            (d(2025, 1, 1), d(2025, 3, 31))
        );
        assert!(parse_period("2025:2025-03").is_err());
        assert!(parse_period("2025-03-02:2025-03-01").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_period("yesterday"), Err(AppError::InvalidPeriod(_))));
        assert!(parse_period("2025-13").is_err());
    }
}
