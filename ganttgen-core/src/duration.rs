//! Duration string parsing
//!
//! A duration is written as `<number><unit>` with unit one of `d`
//! (working days), `w` (weeks), `h` (hours), `m` (months). Every unit
//! converts to a possibly fractional count of working days.

use crate::{Error, Result};

/// Convert a duration string to a number of working days.
///
/// `days_per_week` is the size of the workday set; `days_per_month` is
/// derived from it (`days_per_week / 7 * 30.44`), not a fixed constant.
///
/// Examples: `3d` -> 3.0, `2w` -> 2 * days_per_week, `40h` -> 40 /
/// hours_per_day, `1.5m` -> 1.5 * days_per_month.
pub fn duration_to_working_days(
    s: &str,
    days_per_week: f64,
    days_per_month: f64,
    hours_per_day: f64,
) -> Result<f64> {
    let lowered = s.trim().to_ascii_lowercase();
    let mut chars = lowered.chars();
    let unit = chars.next_back().ok_or_else(|| invalid_duration(s))?;
    let number = chars.as_str().trim_end();
    if !is_plain_number(number) {
        return Err(invalid_duration(s));
    }
    let value: f64 = number.parse().map_err(|_| invalid_duration(s))?;

    match unit {
        'd' => Ok(value),
        'w' => Ok(value * days_per_week),
        'h' => Ok(value / hours_per_day),
        'm' => Ok(value * days_per_month),
        _ => Err(invalid_duration(s)),
    }
}

/// Digits with at most one interior decimal point ("3", "1.5").
fn is_plain_number(s: &str) -> bool {
    if s.is_empty()
        || !s.starts_with(|c: char| c.is_ascii_digit())
        || !s.ends_with(|c: char| c.is_ascii_digit())
    {
        return false;
    }
    let mut seen_dot = false;
    for c in s.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

fn invalid_duration(s: &str) -> Error {
    Error::Validation(format!(
        "invalid duration {s:?}; examples: '3d' (days), '2w' (weeks), '40h' (hours), '1.5m' (months)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAYS_PER_WEEK: f64 = 5.0;
    const DAYS_PER_MONTH: f64 = 5.0 / 7.0 * 30.44;
    const HOURS_PER_DAY: f64 = 8.0;

    fn parse(s: &str) -> Result<f64> {
        duration_to_working_days(s, DAYS_PER_WEEK, DAYS_PER_MONTH, HOURS_PER_DAY)
    }

    #[test]
    fn test_days() {
        assert_eq!(parse("3d").unwrap(), 3.0);
    }

    #[test]
    fn test_weeks_use_days_per_week() {
        assert_eq!(parse("2w").unwrap(), 10.0);
    }

    #[test]
    fn test_hours_divide_by_hours_per_day() {
        assert_eq!(parse("40h").unwrap(), 5.0);
    }

    #[test]
    fn test_months_use_derived_month_length() {
        let expected = 1.5 * DAYS_PER_MONTH;
        assert!((parse("1.5m").unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_case_and_whitespace_tolerated() {
        assert_eq!(parse(" 3 D ").unwrap(), 3.0);
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(parse("0.5w").unwrap(), 2.5);
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", "d", "3x", "abc", "1.5.2d", ".5d", "3.d", "-1d", "3 d d"] {
            assert!(parse(input).is_err(), "expected {input:?} to fail");
        }
    }
}
