//! Calendar arithmetic at day granularity.
//!
//! All dates are [`NaiveDate`]s: a time-of-day or offset never survives past
//! [`midnight`].

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use tasuku_core::constants::{DATE_FORMAT, DATE_FORMAT_LEN};

use crate::error::{RuleError, RuleResult};

/// Truncates an instant to the calendar date it falls on in its own offset.
#[must_use]
pub fn midnight<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// ## Summary
/// Parses a `YYYYMMDD` date string.
///
/// ## Errors
/// Returns `InvalidDateSyntax` unless the input is exactly eight ASCII digits
/// naming a real calendar day.
pub fn parse_date_str(s: &str) -> RuleResult<NaiveDate> {
    let s = s.trim();
    if s.len() != DATE_FORMAT_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RuleError::InvalidDateSyntax(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_err| RuleError::InvalidDateSyntax(s.to_string()))
}

/// Formats a date as `YYYYMMDD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ## Summary
/// Adds whole days to a date.
///
/// ## Errors
/// Returns `DateOutOfRange` if the result leaves chrono's calendar range.
pub fn add_days(date: NaiveDate, days: u64) -> RuleResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(RuleError::DateOutOfRange)
}

/// ## Summary
/// Adds whole years to a date, keeping month and day.
///
/// A day the target month lacks spills into the following month, so
/// February 29 plus one year is March 1.
///
/// ## Errors
/// Returns `DateOutOfRange` if the result leaves chrono's calendar range.
pub fn add_years(date: NaiveDate, years: i32) -> RuleResult<NaiveDate> {
    let year = date
        .year()
        .checked_add(years)
        .ok_or(RuleError::DateOutOfRange)?;
    let first = NaiveDate::from_ymd_opt(year, date.month(), 1).ok_or(RuleError::DateOutOfRange)?;
    add_days(first, u64::from(date.day0()))
}

/// ## Summary
/// Returns the first day of the month after `year`-`month`.
///
/// ## Errors
/// Returns `DateOutOfRange` for an invalid month or a year past chrono's range.
pub fn first_of_next_month(year: i32, month: u32) -> RuleResult<NaiveDate> {
    let (year, month) = if month == 12 {
        (
            year.checked_add(1).ok_or(RuleError::DateOutOfRange)?,
            1,
        )
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(RuleError::DateOutOfRange)
}

/// ## Summary
/// Returns the number of the last day of `year`-`month` (28..=31).
///
/// ## Errors
/// Returns `DateOutOfRange` for an invalid month or a year past chrono's range.
pub fn last_day_of_month(year: i32, month: u32) -> RuleResult<u32> {
    first_of_next_month(year, month)?
        .pred_opt()
        .map(|last| last.day())
        .ok_or(RuleError::DateOutOfRange)
}

/// ## Summary
/// Resolves signed day specs to concrete day numbers of `year`-`month`.
///
/// Negative specs count back from the first day of the following month:
/// `-1` is the last day and `-2` the one before it. Positive specs are kept
/// as they are, even when the month is too short for them. The result is
/// sorted ascending with duplicates removed.
///
/// ## Errors
/// Returns `DateOutOfRange` for an invalid month or a year past chrono's range.
pub fn resolve_days(specs: &[i8], year: i32, month: u32) -> RuleResult<Vec<u32>> {
    let first_of_next = first_of_next_month(year, month)?;

    let mut resolved = specs
        .iter()
        .map(|&spec| {
            if spec < 0 {
                first_of_next
                    .checked_sub_days(Days::new(u64::from(spec.unsigned_abs())))
                    .map(|date| date.day())
                    .ok_or(RuleError::DateOutOfRange)
            } else {
                Ok(u32::from(spec.unsigned_abs()))
            }
        })
        .collect::<RuleResult<Vec<u32>>>()?;

    resolved.sort_unstable();
    resolved.dedup();
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn midnight_drops_time_of_day() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();
        assert_eq!(midnight(&instant), ymd(2024, 3, 5));
    }

    #[test]
    fn midnight_keeps_the_instants_own_calendar_day() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = offset.with_ymd_and_hms(2024, 3, 6, 1, 0, 0).unwrap();
        assert_eq!(midnight(&instant), ymd(2024, 3, 6));
    }

    #[test]
    fn parse_date_accepts_fixed_format() {
        assert_eq!(parse_date_str("20240229").unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse_date_str(" 20240101 ").unwrap(), ymd(2024, 1, 1));
    }

    #[test]
    fn parse_date_rejects_malformed_input() {
        for input in ["", "2024031", "202403011", "2024-3-01", "20230229", "20241301", "+2024030"] {
            assert_eq!(
                parse_date_str(input),
                Err(RuleError::InvalidDateSyntax(input.trim().to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn format_date_pads_fields() {
        assert_eq!(format_date(ymd(2024, 3, 6)), "20240306");
    }

    #[test]
    fn last_day_handles_month_lengths() {
        assert_eq!(last_day_of_month(2024, 1).unwrap(), 31);
        assert_eq!(last_day_of_month(2024, 2).unwrap(), 29);
        assert_eq!(last_day_of_month(2023, 2).unwrap(), 28);
        assert_eq!(last_day_of_month(2024, 4).unwrap(), 30);
        assert_eq!(last_day_of_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn first_of_next_month_rolls_december() {
        assert_eq!(first_of_next_month(2024, 12).unwrap(), ymd(2025, 1, 1));
        assert_eq!(first_of_next_month(2024, 2).unwrap(), ymd(2024, 3, 1));
    }

    #[test]
    fn resolve_days_counts_back_from_next_month() {
        assert_eq!(resolve_days(&[-1, -2], 2024, 2).unwrap(), vec![28, 29]);
        assert_eq!(resolve_days(&[-1, -2], 2023, 2).unwrap(), vec![27, 28]);
        assert_eq!(resolve_days(&[-1], 2024, 12).unwrap(), vec![31]);
    }

    #[test]
    fn resolve_days_sorts_and_dedups() {
        assert_eq!(resolve_days(&[30, -1, 5], 2024, 4).unwrap(), vec![5, 30]);
    }

    #[test]
    fn resolve_days_keeps_overflowing_positive_days() {
        assert_eq!(resolve_days(&[31], 2024, 4).unwrap(), vec![31]);
    }

    #[test]
    fn add_years_spills_leap_day_into_march() {
        assert_eq!(add_years(ymd(2024, 2, 29), 1).unwrap(), ymd(2025, 3, 1));
        assert_eq!(add_years(ymd(2024, 2, 29), 4).unwrap(), ymd(2028, 2, 29));
        assert_eq!(add_years(ymd(2023, 12, 31), 1).unwrap(), ymd(2024, 12, 31));
    }

    #[test]
    fn add_days_reports_overflow() {
        assert_eq!(add_days(NaiveDate::MAX, 1), Err(RuleError::DateOutOfRange));
    }
}
