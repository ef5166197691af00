//! Fixed-step rules: `d <n>` and `y`.

use chrono::NaiveDate;

use crate::error::{NumericField, RuleError, RuleResult};
use crate::rule::date::{add_days, add_years};

/// Returns `start + k * interval_days` for the smallest `k >= 1` landing
/// strictly after `now`.
pub(crate) fn next_daily(
    now: NaiveDate,
    start: NaiveDate,
    interval_days: u16,
) -> RuleResult<NaiveDate> {
    let interval = u64::from(interval_days);
    if interval == 0 {
        return Err(RuleError::invalid_field(NumericField::Interval, interval));
    }

    // Steps already covered by the gap between start and now, then one more.
    let elapsed = u64::try_from(now.signed_duration_since(start).num_days()).unwrap_or(0);
    let steps = elapsed / interval + 1;

    add_days(start, steps * interval)
}

/// Steps `start` forward one year at a time until it is strictly after `now`.
///
/// Each step builds on the previous one, so a February 29 start that spilled
/// into March 1 stays on March 1 in later years.
pub(crate) fn next_yearly(now: NaiveDate, start: NaiveDate) -> RuleResult<NaiveDate> {
    let mut next = start;
    loop {
        next = add_years(next, 1)?;
        if next > now {
            return Ok(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_steps_past_now() {
        assert_eq!(
            next_daily(ymd(2024, 3, 5), ymd(2024, 3, 1), 3).unwrap(),
            ymd(2024, 3, 7)
        );
    }

    #[test]
    fn daily_lands_on_day_after_now_when_aligned() {
        assert_eq!(
            next_daily(ymd(2024, 3, 4), ymd(2024, 3, 1), 3).unwrap(),
            ymd(2024, 3, 7)
        );
        assert_eq!(
            next_daily(ymd(2024, 3, 6), ymd(2024, 3, 1), 1).unwrap(),
            ymd(2024, 3, 7)
        );
    }

    #[test]
    fn daily_future_start_takes_exactly_one_step() {
        assert_eq!(
            next_daily(ymd(2024, 1, 1), ymd(2024, 2, 1), 7).unwrap(),
            ymd(2024, 2, 8)
        );
    }

    #[test]
    fn daily_matches_stepwise_definition() {
        let now = ymd(2024, 6, 15);
        for interval in [1_u16, 2, 5, 30, 400] {
            for offset in 0_u64..40 {
                let start = ymd(2024, 5, 1) + chrono::Days::new(offset);
                let mut expected = start;
                loop {
                    expected = expected + chrono::Days::new(u64::from(interval));
                    if expected > now {
                        break;
                    }
                }
                assert_eq!(
                    next_daily(now, start, interval).unwrap(),
                    expected,
                    "interval {interval}, start {start}"
                );
            }
        }
    }

    #[test]
    fn yearly_steps_past_now() {
        assert_eq!(
            next_yearly(ymd(2024, 6, 1), ymd(2020, 3, 15)).unwrap(),
            ymd(2025, 3, 15)
        );
        assert_eq!(
            next_yearly(ymd(2024, 3, 15), ymd(2024, 3, 15)).unwrap(),
            ymd(2025, 3, 15)
        );
    }

    #[test]
    fn yearly_leap_day_spills_into_march() {
        assert_eq!(
            next_yearly(ymd(2024, 3, 1), ymd(2024, 2, 29)).unwrap(),
            ymd(2025, 3, 1)
        );
    }

    #[test]
    fn yearly_leap_day_spill_carries_into_later_years() {
        assert_eq!(
            next_yearly(ymd(2027, 3, 1), ymd(2024, 2, 29)).unwrap(),
            ymd(2028, 3, 1)
        );
    }
}
