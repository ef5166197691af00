//! Rule string grammar.
//!
//! | Kind    | Pattern                        |
//! |---------|--------------------------------|
//! | daily   | `d <1-3 digits>`               |
//! | yearly  | `y`                            |
//! | weekly  | `w <d>(,<d>)*`                 |
//! | monthly | `m <day>(,<day>)*[ <m>(,<m>)*]` |
//!
//! A string must match one pattern exactly, with single spaces between groups.

use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::core::{ALL_MONTHS, Recurrence};
use crate::error::{NumericField, RuleError, RuleResult};

#[expect(clippy::expect_used, reason = "pattern literals are known to compile")]
static DAILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^d \d{1,3}$").expect("valid daily pattern"));

#[expect(clippy::expect_used, reason = "pattern literals are known to compile")]
static YEARLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^y$").expect("valid yearly pattern"));

#[expect(clippy::expect_used, reason = "pattern literals are known to compile")]
static WEEKLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^w \d(,\d)*$").expect("valid weekly pattern"));

#[expect(clippy::expect_used, reason = "pattern literals are known to compile")]
static MONTHLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^m -?\d{1,2}(,-?\d{1,2})*( \d{1,2}(,\d{1,2})*)?$").expect("valid monthly pattern")
});

/// ## Summary
/// Parses a repeat rule string into a [`Recurrence`].
///
/// Surrounding whitespace is ignored. Lists come back sorted ascending and
/// deduplicated; a monthly rule without a month group covers all twelve months.
///
/// ## Errors
/// - `EmptyRule` for an empty or blank string.
/// - `UnsupportedFormat` when the string matches none of the patterns.
/// - `InvalidNumericField` when a matched value is out of range.
pub fn parse_rule(input: &str) -> RuleResult<Recurrence> {
    let rule = input.trim();
    if rule.is_empty() {
        return Err(RuleError::EmptyRule);
    }

    let recurrence = match rule {
        r if DAILY.is_match(r) => Recurrence::Daily {
            interval_days: parse_value(group(r, 1)?, NumericField::Interval)?,
        },
        r if YEARLY.is_match(r) => Recurrence::Yearly,
        r if WEEKLY.is_match(r) => Recurrence::Weekly {
            weekdays: parse_list(group(r, 1)?, NumericField::Weekday)?,
        },
        r if MONTHLY.is_match(r) => {
            let days = parse_list(group(r, 1)?, NumericField::MonthDay)?;
            let months = match r.split(' ').nth(2) {
                Some(months) => parse_list(months, NumericField::Month)?,
                None => ALL_MONTHS.to_vec(),
            };
            Recurrence::Monthly { days, months }
        }
        r => return Err(RuleError::UnsupportedFormat(r.to_string())),
    };

    recurrence.validate()?;
    tracing::trace!(rule = %rule, kind = recurrence.kind(), "Parsed repeat rule");
    Ok(recurrence)
}

/// Returns the space-separated group at `index` of an already matched rule.
fn group(rule: &str, index: usize) -> RuleResult<&str> {
    rule.split(' ')
        .nth(index)
        .ok_or_else(|| RuleError::UnsupportedFormat(rule.to_string()))
}

fn parse_value<T: FromStr>(value: &str, field: NumericField) -> RuleResult<T> {
    value
        .parse()
        .map_err(|_err| RuleError::invalid_field(field, value))
}

/// Parses a comma-separated list, sorted ascending and deduplicated.
fn parse_list<T: FromStr + Ord>(list: &str, field: NumericField) -> RuleResult<Vec<T>> {
    let mut values = list
        .split(',')
        .map(|v| parse_value(v, field))
        .collect::<RuleResult<Vec<T>>>()?;
    values.sort_unstable();
    values.dedup();
    Ok(values)
}
