//! Conversion between academic weeks and ISO calendar weeks.
//!
//! An academic week is anchored on the Monday of the calendar week that
//! contains the period's `start_date`: academic week 1 is that calendar week,
//! week 2 the following one and so on. Every function here is pure and never
//! panics; `None` means "conversion not possible" and callers fall back to the
//! raw calendar week.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::week_ref::{AcademicWeekRef, CalendarWeekRef};
use crate::domain::a001_academic_period::AcademicPeriod;

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Calendar week of the given academic week.
///
/// Non-positive weeks are not rejected: week 0 is the calendar week right
/// before the anchor, week -1 the one before that.
pub fn to_calendar_week(
    week: AcademicWeekRef,
    period_start: Option<NaiveDate>,
) -> Option<CalendarWeekRef> {
    let anchor = week_start(period_start?);
    let offset = Duration::days((i64::from(week.academic_week) - 1) * 7);
    let date = anchor.checked_add_signed(offset)?;
    let iso = date.iso_week();
    Some(CalendarWeekRef::new(iso.year(), iso.week()))
}

/// Academic week of the given calendar week.
///
/// Returns `None` when there is no anchor, when the ISO week does not exist
/// (week 0, week 53 of a 52-week year) or when the week falls before week 1.
/// `academic_year` is always the year of `period_start`, even for weeks that
/// land in the following calendar year.
pub fn to_academic_week(
    week: CalendarWeekRef,
    period_start: Option<NaiveDate>,
) -> Option<AcademicWeekRef> {
    let period_start = period_start?;
    let monday = NaiveDate::from_isoywd_opt(week.year, week.week, Weekday::Mon)?;
    let academic_week = weeks_between(week_start(period_start), monday) + 1;
    if academic_week < 1 {
        return None;
    }
    Some(AcademicWeekRef::new(period_start.year(), academic_week))
}

/// Academic week containing `date`, `None` before week 1
pub fn academic_week_of(date: NaiveDate, period_start: NaiveDate) -> Option<i32> {
    let week = weeks_between(week_start(period_start), week_start(date)) + 1;
    (week >= 1).then_some(week)
}

/// Number of academic weeks in a period, counting the week of `end_date`
pub fn weeks_in_period(period: &AcademicPeriod) -> i32 {
    weeks_between(week_start(period.start_date), week_start(period.end_date)) + 1
}

/// Monday and Sunday of an academic week
pub fn week_bounds(academic_week: i32, period_start: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let offset = Duration::days((i64::from(academic_week) - 1) * 7);
    let monday = week_start(period_start).checked_add_signed(offset)?;
    let sunday = monday.checked_add_signed(Duration::days(6))?;
    Some((monday, sunday))
}

// Both arguments are Mondays, so the division is exact.
fn weeks_between(from_monday: NaiveDate, to_monday: NaiveDate) -> i32 {
    let weeks = (to_monday - from_monday).num_days().div_euclid(7);
    i32::try_from(weeks).unwrap_or(if weeks < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn anchor() -> Option<NaiveDate> {
        Some(date("2025-02-03"))
    }

    #[test]
    fn test_week_start() {
        // 2025-02-03 is a Monday
        assert_eq!(week_start(date("2025-02-03")), date("2025-02-03"));
        assert_eq!(week_start(date("2025-02-06")), date("2025-02-03"));
        assert_eq!(week_start(date("2025-02-09")), date("2025-02-03"));
        assert_eq!(week_start(date("2025-01-01")), date("2024-12-30"));
    }

    #[test]
    fn test_first_week_maps_to_anchor_week() {
        assert_eq!(
            to_calendar_week(AcademicWeekRef::new(2025, 1), anchor()),
            Some(CalendarWeekRef::new(2025, 6))
        );
    }

    #[test]
    fn test_first_week_with_mid_week_start() {
        // Thursday start still belongs to the week of Monday 2025-02-03
        assert_eq!(
            to_calendar_week(AcademicWeekRef::new(2025, 1), Some(date("2025-02-06"))),
            Some(CalendarWeekRef::new(2025, 6))
        );
    }

    #[test]
    fn test_fifth_week_is_28_days_later() {
        let expected = date("2025-03-03").iso_week();
        assert_eq!(
            to_calendar_week(AcademicWeekRef::new(2025, 5), anchor()),
            Some(CalendarWeekRef::new(expected.year(), expected.week()))
        );
        assert_eq!(expected.week(), 10);
    }

    #[test]
    fn test_non_positive_week_goes_before_anchor() {
        assert_eq!(
            to_calendar_week(AcademicWeekRef::new(2025, 0), anchor()),
            Some(CalendarWeekRef::new(2025, 5))
        );
        assert_eq!(
            to_calendar_week(AcademicWeekRef::new(2025, -5), anchor()),
            Some(CalendarWeekRef::new(2024, 52))
        );
    }

    #[test]
    fn test_without_anchor_returns_none() {
        assert_eq!(to_calendar_week(AcademicWeekRef::new(2025, 1), None), None);
        assert_eq!(to_academic_week(CalendarWeekRef::new(2025, 6), None), None);
    }

    #[test]
    fn test_calendar_week_before_anchor_is_none() {
        assert_eq!(to_academic_week(CalendarWeekRef::new(2025, 1), anchor()), None);
        assert_eq!(to_academic_week(CalendarWeekRef::new(2025, 5), anchor()), None);
    }

    #[test]
    fn test_invalid_iso_week_is_none() {
        // 2025 has 52 ISO weeks
        assert_eq!(to_academic_week(CalendarWeekRef::new(2025, 53), anchor()), None);
        assert_eq!(to_academic_week(CalendarWeekRef::new(2025, 0), anchor()), None);
    }

    #[test]
    fn test_to_academic_week() {
        assert_eq!(
            to_academic_week(CalendarWeekRef::new(2025, 6), anchor()),
            Some(AcademicWeekRef::new(2025, 1))
        );
        assert_eq!(
            to_academic_week(CalendarWeekRef::new(2025, 10), anchor()),
            Some(AcademicWeekRef::new(2025, 5))
        );
    }

    #[test]
    fn test_academic_year_follows_period_start_across_new_year() {
        let calendar = to_calendar_week(AcademicWeekRef::new(2025, 50), anchor()).unwrap();
        assert_eq!(calendar, CalendarWeekRef::new(2026, 3));
        assert_eq!(
            to_academic_week(calendar, anchor()),
            Some(AcademicWeekRef::new(2025, 50))
        );
    }

    #[test]
    fn test_round_trip() {
        for start in ["2025-02-03", "2025-02-06", "2024-08-04", "2020-12-31"] {
            let start = Some(date(start));
            let year = start.unwrap().year();
            for week in 1..=60 {
                let calendar = to_calendar_week(AcademicWeekRef::new(year, week), start).unwrap();
                assert_eq!(
                    to_academic_week(calendar, start),
                    Some(AcademicWeekRef::new(year, week)),
                    "start {:?}, week {}",
                    start,
                    week
                );
            }
        }
    }

    #[test]
    fn test_academic_week_of() {
        let start = date("2025-02-05");
        assert_eq!(academic_week_of(date("2025-02-03"), start), Some(1));
        assert_eq!(academic_week_of(date("2025-02-09"), start), Some(1));
        assert_eq!(academic_week_of(date("2025-02-10"), start), Some(2));
        assert_eq!(academic_week_of(date("2025-02-02"), start), None);
    }

    #[test]
    fn test_weeks_in_period() {
        let period = AcademicPeriod {
            year: 2025,
            start_date: date("2025-02-03"),
            end_date: date("2025-11-28"),
        };
        assert_eq!(weeks_in_period(&period), 43);

        let single = AcademicPeriod {
            year: 2025,
            start_date: date("2025-02-04"),
            end_date: date("2025-02-07"),
        };
        assert_eq!(weeks_in_period(&single), 1);
    }

    #[test]
    fn test_week_bounds() {
        assert_eq!(
            week_bounds(2, date("2025-02-05")),
            Some((date("2025-02-10"), date("2025-02-16")))
        );
    }
}
