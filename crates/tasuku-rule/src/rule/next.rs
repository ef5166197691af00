//! Entry points that take and return `YYYYMMDD` strings.

use chrono::{DateTime, NaiveDate, TimeZone};

use super::date::{format_date, midnight, parse_date_str};
use super::parse::parse_rule;
use crate::error::{RuleError, RuleResult};

/// ## Summary
/// Computes the next date a task repeats on.
///
/// `now` is the reference day; `start` is the task's current `YYYYMMDD` date
/// and `repeat` its rule string. Both strings are trimmed first. The result
/// is strictly after `now` and formatted as `YYYYMMDD`.
///
/// ## Errors
/// - `EmptyRule` if `repeat` is blank.
/// - `InvalidDateSyntax` if `start` is not a `YYYYMMDD` date.
/// - `UnsupportedFormat` / `InvalidNumericField` if `repeat` does not parse.
/// - `NoMatchingDay` if a monthly rule can never be satisfied.
/// - `DateOutOfRange` if the next date falls outside chrono's calendar.
pub fn next_date(now: NaiveDate, start: &str, repeat: &str) -> RuleResult<String> {
    let repeat = repeat.trim();
    if repeat.is_empty() {
        return Err(RuleError::EmptyRule);
    }

    let start_date = parse_date_str(start)?;
    let recurrence = parse_rule(repeat)?;

    let next = recurrence.next_after(now, start_date)?;

    tracing::debug!(
        rule = %recurrence,
        kind = recurrence.kind(),
        %now,
        start = %start_date,
        %next,
        "Computed next date"
    );

    Ok(format_date(next))
}

/// ## Summary
/// Like [`next_date`], with `now` given as an instant. Only the calendar day
/// the instant falls on in its own offset is used.
///
/// ## Errors
/// See [`next_date`].
pub fn next_date_at<Tz: TimeZone>(
    now: &DateTime<Tz>,
    start: &str,
    repeat: &str,
) -> RuleResult<String> {
    next_date(midnight(now), start, repeat)
}
