//! Parsed recurrence rule value type.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::resolve;
use crate::error::{NumericField, RuleError, RuleResult};

/// Largest accepted interval of a daily rule.
pub const MAX_INTERVAL_DAYS: u16 = 400;

/// Month set used when a monthly rule omits its month group.
pub const ALL_MONTHS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Day spec meaning "last day of the month".
pub const LAST_DAY: i8 = -1;
/// Day spec meaning "second-to-last day of the month".
pub const SECOND_TO_LAST_DAY: i8 = -2;

/// A parsed repeat rule.
///
/// Values produced by [`parse_rule`](super::parse_rule) have every list sorted
/// ascending, deduplicated and range-checked. Hand-built values are checked by
/// [`Recurrence::validate`] before they are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    /// `d <n>`: every `interval_days` days.
    Daily { interval_days: u16 },
    /// `y`: every year on the same month and day.
    Yearly,
    /// `w <d,...>`: on the listed ISO weekdays (1 = Monday, 7 = Sunday).
    Weekly { weekdays: Vec<u8> },
    /// `m <d,...> [<m,...>]`: on the listed days of the listed months.
    ///
    /// Days are `1..=31`, or `-1`/`-2` for the last and second-to-last day.
    Monthly { days: Vec<i8>, months: Vec<u8> },
}

impl Recurrence {
    /// Short name of the rule kind, used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Daily { .. } => "daily",
            Self::Yearly => "yearly",
            Self::Weekly { .. } => "weekly",
            Self::Monthly { .. } => "monthly",
        }
    }

    /// ## Summary
    /// Checks every numeric field against its valid range.
    ///
    /// ## Errors
    /// Returns `InvalidNumericField` naming the first offending value, or
    /// `UnsupportedFormat` when a required list is empty.
    pub fn validate(&self) -> RuleResult<()> {
        match self {
            Self::Daily { interval_days } => {
                if (1..=MAX_INTERVAL_DAYS).contains(interval_days) {
                    Ok(())
                } else {
                    Err(RuleError::invalid_field(
                        NumericField::Interval,
                        interval_days,
                    ))
                }
            }
            Self::Yearly => Ok(()),
            Self::Weekly { weekdays } => {
                if weekdays.is_empty() {
                    return Err(RuleError::UnsupportedFormat(self.to_string()));
                }
                check_all(weekdays, NumericField::Weekday, |wd| (1..=7).contains(wd))
            }
            Self::Monthly { days, months } => {
                if days.is_empty() || months.is_empty() {
                    return Err(RuleError::UnsupportedFormat(self.to_string()));
                }
                check_all(days, NumericField::MonthDay, |d| {
                    *d == LAST_DAY || *d == SECOND_TO_LAST_DAY || (1..=31).contains(d)
                })?;
                check_all(months, NumericField::Month, |m| (1..=12).contains(m))
            }
        }
    }

    /// ## Summary
    /// Computes the first date this rule produces after `now`, counting from
    /// the task's current date `start`.
    ///
    /// ## Errors
    /// Returns `NoMatchingDay` when a monthly rule names days that none of its
    /// months contain, and any error of [`Recurrence::validate`].
    pub fn next_after(&self, now: NaiveDate, start: NaiveDate) -> RuleResult<NaiveDate> {
        self.validate()?;

        let found = match self {
            Self::Daily { interval_days } => Some(resolve::advance::next_daily(
                now,
                start,
                *interval_days,
            )?),
            Self::Yearly => Some(resolve::advance::next_yearly(now, start)?),
            Self::Weekly { weekdays } => resolve::weekly::next_weekly(now, start, weekdays)?,
            Self::Monthly { days, months } => {
                resolve::monthly::next_monthly(now, start, days, months)?
            }
        };

        found.ok_or_else(|| RuleError::NoMatchingDay(self.to_string()))
    }
}

fn check_all<T>(
    values: &[T],
    field: NumericField,
    valid: impl Fn(&T) -> bool,
) -> RuleResult<()>
where
    T: fmt::Display,
{
    match values.iter().find(|v| !valid(*v)) {
        Some(bad) => Err(RuleError::invalid_field(field, bad)),
        None => Ok(()),
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { interval_days } => write!(f, "d {interval_days}"),
            Self::Yearly => f.write_str("y"),
            Self::Weekly { weekdays } => {
                f.write_str("w ")?;
                write_list(f, weekdays)
            }
            Self::Monthly { days, months } => {
                f.write_str("m ")?;
                write_list(f, days)?;
                if months.as_slice() != ALL_MONTHS {
                    f.write_str(" ")?;
                    write_list(f, months)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Recurrence {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_rule(s)
    }
}
