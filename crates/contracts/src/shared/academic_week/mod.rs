//! Academic week calendar: week conversion and dashboard week navigation.

pub mod converter;
pub mod navigator;
pub mod week_ref;

pub use converter::{
    academic_week_of, to_academic_week, to_calendar_week, week_bounds, week_start,
    weeks_in_period,
};
pub use navigator::{NavigatorPhase, NavigatorState, RequestKey, WeekTransition};
pub use week_ref::{AcademicWeekRef, CalendarWeekRef};
