//! Working-day calendar
//!
//! Parses a comma-separated workday string ("M,T,W,Th,F") into a weekday
//! set and advances dates by whole working days against that set.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::{Error, Result};

/// Parse comma-separated day abbreviations into a weekday set.
///
/// Abbreviations are case-insensitive: M, T, W, Th, F, Sa, Su. Spaces are
/// ignored. An unknown token is a validation error.
pub fn parse_workdays(s: &str) -> Result<HashSet<Weekday>> {
    let mut set = HashSet::new();
    for part in s.replace(' ', "").split(',') {
        let day = match part.to_ascii_lowercase().as_str() {
            "m" => Weekday::Mon,
            "t" => Weekday::Tue,
            "w" => Weekday::Wed,
            "th" => Weekday::Thu,
            "f" => Weekday::Fri,
            "sa" => Weekday::Sat,
            "su" => Weekday::Sun,
            _ => {
                return Err(Error::Validation(format!(
                    "unknown workday {part:?}; valid values: M T W Th F Sa Su"
                )))
            }
        };
        set.insert(day);
    }
    Ok(set)
}

/// Return the date `n` working days after `start`.
///
/// `n` is rounded up to the next whole day. Zero or negative `n` returns
/// `start` unchanged. The walk advances one calendar day at a time and
/// counts only days whose weekday is in `workdays`.
pub fn add_working_days(start: NaiveDate, n: f64, workdays: &HashSet<Weekday>) -> NaiveDate {
    let n = n.ceil() as i64;
    if n <= 0 {
        return start;
    }
    let mut current = start;
    let mut added = 0;
    while added < n {
        current = current + Duration::days(1);
        if workdays.contains(&current.weekday()) {
            added += 1;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekdays() -> HashSet<Weekday> {
        parse_workdays("M,T,W,Th,F").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_workdays() {
        let set = weekdays();
        assert_eq!(set.len(), 5);
        assert!(set.contains(&Weekday::Mon));
        assert!(set.contains(&Weekday::Fri));
        assert!(!set.contains(&Weekday::Sat));
    }

    #[test]
    fn test_parse_workdays_case_and_spaces() {
        let set = parse_workdays("m, t, SA").unwrap();
        assert!(set.contains(&Weekday::Sat));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_parse_workdays_unknown_token() {
        assert!(parse_workdays("M,T,X").is_err());
        assert!(parse_workdays("").is_err());
    }

    #[test]
    fn test_advance_monday_by_one_is_tuesday() {
        // 2025-01-06 is a Monday
        let monday = date(2025, 1, 6);
        assert_eq!(add_working_days(monday, 1.0, &weekdays()), date(2025, 1, 7));
    }

    #[test]
    fn test_advance_friday_skips_weekend() {
        // 2025-01-10 is a Friday; next working day is Monday the 13th
        let friday = date(2025, 1, 10);
        assert_eq!(
            add_working_days(friday, 1.0, &weekdays()),
            date(2025, 1, 13)
        );
    }

    #[test]
    fn test_zero_or_negative_returns_start() {
        let monday = date(2025, 1, 6);
        assert_eq!(add_working_days(monday, 0.0, &weekdays()), monday);
        assert_eq!(add_working_days(monday, -3.0, &weekdays()), monday);
    }

    #[test]
    fn test_fractional_days_round_up() {
        let monday = date(2025, 1, 6);
        assert_eq!(
            add_working_days(monday, 0.5, &weekdays()),
            date(2025, 1, 7)
        );
    }

    #[test]
    fn test_week_advance_lands_next_monday() {
        let monday = date(2025, 1, 6);
        assert_eq!(
            add_working_days(monday, 5.0, &weekdays()),
            date(2025, 1, 13)
        );
    }
}
