use chrono::{DateTime, Datelike, NaiveDate, Utc};
use contracts::dashboards::d100_pagela_control::{
    ClubWeeklyStatus, CurrentWeek, PagelaStatus, PeriodStatus, WeeklyControlRequest,
    WeeklyControlResponse,
};
use contracts::domain::a001_academic_period::AcademicPeriod;
use contracts::domain::a002_club::Club;
use contracts::shared::academic_week::{
    academic_week_of, to_calendar_week, week_bounds, weeks_in_period, AcademicWeekRef,
};
use std::collections::HashMap;

use crate::domain::{a001_academic_period, a002_club};
use crate::shared::data::store::Store;
use crate::shared::error::ApiResult;

/// Academic week containing `today`.
///
/// Period choice: the one containing today, else the one labeled with
/// today's year, else the latest one already started. Outside its bounds the
/// week is pinned to the first or last week of that period.
pub fn current_week(store: &Store, today: NaiveDate) -> ApiResult<CurrentWeek> {
    let periods = a001_academic_period::repository::list_all(store)?;

    let Some(period) = select_period(&periods, today) else {
        return Ok(CurrentWeek {
            academic_year: today.year(),
            academic_week: None,
            is_within_period: false,
        });
    };

    let last_week = weeks_in_period(period);
    let (week, within) = if today < period.start_date {
        (1, false)
    } else if today > period.end_date {
        (last_week, false)
    } else {
        let week = academic_week_of(today, period.start_date).unwrap_or(1);
        (week.min(last_week), true)
    };

    Ok(CurrentWeek {
        academic_year: period.year,
        academic_week: Some(week),
        is_within_period: within,
    })
}

fn select_period(periods: &[AcademicPeriod], today: NaiveDate) -> Option<&AcademicPeriod> {
    periods
        .iter()
        .find(|p| p.contains(today))
        .or_else(|| periods.iter().find(|p| p.year == today.year()))
        .or_else(|| {
            periods
                .iter()
                .filter(|p| p.start_date <= today)
                .max_by_key(|p| p.start_date)
        })
}

/// Pagela status of every club for one academic week.
///
/// Weeks below 1 are normalized to week 1. Weeks past the end of the period
/// are echoed unchanged with `out_of_period`.
pub fn weekly_control(store: &Store, request: WeeklyControlRequest) -> ApiResult<WeeklyControlResponse> {
    let year = request.year;
    let week = request.week.max(1);
    if week != request.week {
        tracing::debug!("Week {} normalized to {} for {}", request.week, week, year);
    }

    let clubs = a002_club::repository::list_all(store)?;

    let Some(period) = a001_academic_period::repository::get_by_year(store, year)? else {
        return Ok(WeeklyControlResponse {
            year,
            week,
            calendar_week: None,
            period_status: PeriodStatus::NoPeriod,
            period_start: None,
            week_start: None,
            week_end: None,
            clubs: clubs
                .into_iter()
                .map(|c| club_status(c, PagelaStatus::NoPeriod, None))
                .collect(),
        });
    };

    let calendar_week = to_calendar_week(AcademicWeekRef::new(year, week), Some(period.start_date));
    let bounds = week_bounds(week, period.start_date);
    let base = WeeklyControlResponse {
        year,
        week,
        calendar_week,
        period_status: PeriodStatus::InPeriod,
        period_start: Some(period.start_date),
        week_start: bounds.map(|(monday, _)| monday),
        week_end: bounds.map(|(_, sunday)| sunday),
        clubs: Vec::new(),
    };

    if week > weeks_in_period(&period) {
        return Ok(WeeklyControlResponse {
            period_status: PeriodStatus::OutOfPeriod,
            clubs: clubs
                .into_iter()
                .map(|c| club_status(c, PagelaStatus::OutOfPeriod, None))
                .collect(),
            ..base
        });
    }

    let has_exception = match bounds {
        Some((monday, sunday)) => a001_academic_period::repository::list_exceptions(store, year)?
            .iter()
            .any(|e| monday <= e.date && e.date <= sunday),
        None => false,
    };

    let submitted: HashMap<_, _> = a002_club::repository::pagelas_for_week(store, year, week)?
        .into_iter()
        .map(|p| (p.club_id, p.submitted_at))
        .collect();

    let clubs = clubs
        .into_iter()
        .map(|club| match submitted.get(&club.id) {
            Some(at) => club_status(club, PagelaStatus::Ok, Some(*at)),
            None if has_exception => club_status(club, PagelaStatus::Exception, None),
            None => club_status(club, PagelaStatus::Missing, None),
        })
        .collect();

    Ok(WeeklyControlResponse { clubs, ..base })
}

fn club_status(club: Club, status: PagelaStatus, submitted_at: Option<DateTime<Utc>>) -> ClubWeeklyStatus {
    ClubWeeklyStatus {
        club_id: club.id,
        club_number: club.number,
        club_name: club.name,
        status,
        submitted_at,
    }
}
