//! Next-date search for each rule kind.

pub(crate) mod advance;
pub(crate) mod monthly;
pub(crate) mod weekly;

use chrono::NaiveDate;

/// Day a weekly or monthly search counts from: the task's own date while it
/// is still ahead of `now`, otherwise `now`.
pub(crate) fn base_date(now: NaiveDate, start: NaiveDate) -> NaiveDate {
    if start > now { start } else { now }
}
