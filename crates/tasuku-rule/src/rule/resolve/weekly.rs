//! `w <d,...>` rules.

use chrono::{Datelike, NaiveDate};

use super::base_date;
use crate::error::RuleResult;
use crate::rule::date::add_days;

/// Finds the next listed ISO weekday after the base date.
///
/// The base date itself is never chosen, even when its weekday is listed:
/// a later weekday of the same week wins, otherwise the earliest listed
/// weekday of the following week. `weekdays` must be sorted ascending.
/// Returns `None` only for an empty list.
pub(crate) fn next_weekly(
    now: NaiveDate,
    start: NaiveDate,
    weekdays: &[u8],
) -> RuleResult<Option<NaiveDate>> {
    let Some(&first) = weekdays.first() else {
        return Ok(None);
    };

    let base = base_date(now, start);
    let current = base.weekday().number_from_monday();

    let offset = weekdays
        .iter()
        .map(|&wd| u32::from(wd))
        .find(|&wd| wd > current)
        .map_or(7 - current + u32::from(first), |wd| wd - current);

    tracing::trace!(%base, current, offset, "Resolved weekly offset");
    add_days(base, u64::from(offset)).map(Some)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-03-04 is a Monday.
    fn monday() -> NaiveDate {
        ymd(2024, 3, 4)
    }

    #[test]
    fn same_day_weekday_is_not_reselected() {
        let next = next_weekly(monday(), monday(), &[1, 3]).unwrap();
        assert_eq!(next, Some(ymd(2024, 3, 6)));
    }

    #[test]
    fn only_current_weekday_wraps_a_full_week() {
        let next = next_weekly(monday(), monday(), &[1]).unwrap();
        assert_eq!(next, Some(ymd(2024, 3, 11)));
    }

    #[test]
    fn earlier_weekdays_wrap_into_next_week() {
        // Thursday, listed Monday and Tuesday.
        let thursday = ymd(2024, 3, 7);
        let next = next_weekly(thursday, thursday, &[1, 2]).unwrap();
        assert_eq!(next, Some(ymd(2024, 3, 11)));
    }

    #[test]
    fn sunday_counts_as_seven() {
        let sunday = ymd(2024, 3, 10);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(
            next_weekly(sunday, sunday, &[7]).unwrap(),
            Some(ymd(2024, 3, 17))
        );
        assert_eq!(
            next_weekly(ymd(2024, 3, 9), ymd(2024, 3, 1), &[7]).unwrap(),
            Some(sunday)
        );
    }

    #[test]
    fn future_start_is_the_base() {
        // now is Monday 2024-03-04, the task already sits on Friday 2024-03-15.
        let next = next_weekly(monday(), ymd(2024, 3, 15), &[5]).unwrap();
        assert_eq!(next, Some(ymd(2024, 3, 22)));
    }

    #[test]
    fn result_is_always_listed_and_after_base() {
        let lists: [&[u8]; 4] = [&[1], &[2, 4, 6], &[7], &[1, 2, 3, 4, 5, 6, 7]];
        for offset in 0..14 {
            let now = monday() + chrono::Days::new(offset);
            for weekdays in lists {
                let next = next_weekly(now, ymd(2024, 1, 1), weekdays)
                    .unwrap()
                    .unwrap();
                let wd = u8::try_from(next.weekday().number_from_monday()).unwrap();
                assert!(weekdays.contains(&wd), "{next} not in {weekdays:?}");
                assert!(next > now);
                assert!(next <= now + chrono::Days::new(7));
            }
        }
    }

    #[test]
    fn empty_list_has_no_match() {
        assert_eq!(next_weekly(monday(), monday(), &[]).unwrap(), None);
    }
}
