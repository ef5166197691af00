//! `m <day,...> [<month,...>]` rules.

use chrono::{Datelike, NaiveDate};

use super::base_date;
use crate::error::{RuleError, RuleResult};
use crate::rule::date::{last_day_of_month, resolve_days};

/// Finds the next listed (month, day) pair after the base date.
///
/// The base year is scanned first, starting at the base month and skipping
/// days up to and including the base day. If nothing qualifies, the
/// following year is scanned in full. Day numbers a month is too short for
/// are skipped, never clamped. Both lists must be sorted ascending.
///
/// Returns `None` when neither year has a matching day.
pub(crate) fn next_monthly(
    now: NaiveDate,
    start: NaiveDate,
    days: &[i8],
    months: &[u8],
) -> RuleResult<Option<NaiveDate>> {
    let base = base_date(now, start);

    if let Some(found) = scan_year(base.year(), days, months, Some(base))? {
        return Ok(Some(found));
    }

    let next_year = base
        .year()
        .checked_add(1)
        .ok_or(RuleError::DateOutOfRange)?;
    let found = scan_year(next_year, days, months, None)?;
    if found.is_none() {
        tracing::debug!(%base, ?days, ?months, "No listed month contains the requested days");
    }
    Ok(found)
}

/// Returns the first listed day of `year`, optionally restricted to days
/// strictly after `after`.
fn scan_year(
    year: i32,
    days: &[i8],
    months: &[u8],
    after: Option<NaiveDate>,
) -> RuleResult<Option<NaiveDate>> {
    for month in months.iter().map(|&m| u32::from(m)) {
        let after_day = match after {
            Some(after) if month < after.month() => continue,
            Some(after) if month == after.month() => after.day(),
            _ => 0,
        };

        let last_day = last_day_of_month(year, month)?;
        let day = resolve_days(days, year, month)?
            .into_iter()
            .take_while(|&day| day <= last_day)
            .find(|&day| day > after_day);

        if let Some(day) = day {
            return NaiveDate::from_ymd_opt(year, month, day)
                .map(Some)
                .ok_or(RuleError::DateOutOfRange);
        }
    }

    Ok(None)
}
