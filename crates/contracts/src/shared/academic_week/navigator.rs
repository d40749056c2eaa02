//! Week navigation state of the control dashboard.
//!
//! `NavigatorState` is the single source of truth for the week on screen.
//! It is either `Unset` (nothing viewed yet) or `Viewing` a week, and it also
//! remembers the "current week" reported by the server. Every transition
//! returns a [`WeekTransition`]; `Changed` is the signal for collaborators to
//! drop their per-week state (expanded rows, page index, loaded data).
//!
//! Transitions never fail. Missing data leaves the state untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::converter;
use super::week_ref::{AcademicWeekRef, CalendarWeekRef};

/// Key a weekly fetch is issued under. A response is applied only while the
/// navigator still views the same week.
pub type RequestKey = AcademicWeekRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorPhase {
    Unset,
    Viewing(AcademicWeekRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekTransition {
    Changed {
        from: Option<AcademicWeekRef>,
        to: AcademicWeekRef,
    },
    Unchanged,
}

impl WeekTransition {
    pub fn is_changed(&self) -> bool {
        matches!(self, WeekTransition::Changed { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    viewed_academic_year: Option<i32>,
    viewed_academic_week: Option<i32>,
    current_academic_year: Option<i32>,
    current_academic_week: Option<i32>,
}

impl NavigatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> NavigatorPhase {
        match self.viewed() {
            Some(week) => NavigatorPhase::Viewing(week),
            None => NavigatorPhase::Unset,
        }
    }

    pub fn viewed(&self) -> Option<AcademicWeekRef> {
        match (self.viewed_academic_year, self.viewed_academic_week) {
            (Some(year), Some(week)) => Some(AcademicWeekRef::new(year, week)),
            _ => None,
        }
    }

    /// Server-reported "now", if known
    pub fn current(&self) -> Option<AcademicWeekRef> {
        match (self.current_academic_year, self.current_academic_week) {
            (Some(year), Some(week)) => Some(AcademicWeekRef::new(year, week)),
            _ => None,
        }
    }

    pub fn viewed_academic_year(&self) -> Option<i32> {
        self.viewed_academic_year
    }

    pub fn viewed_academic_week(&self) -> Option<i32> {
        self.viewed_academic_week
    }

    pub fn current_academic_year(&self) -> Option<i32> {
        self.current_academic_year
    }

    pub fn current_academic_week(&self) -> Option<i32> {
        self.current_academic_week
    }

    /// Records the server's current-week fact. Does not move the viewed week.
    pub fn set_current(&mut self, year: Option<i32>, week: Option<i32>) {
        if let (Some(year), Some(week)) = (year, week) {
            self.current_academic_year = Some(year);
            self.current_academic_week = Some(week);
        }
    }

    /// `Unset` → `Viewing(current)`. No-op once a week is viewed.
    pub fn initialize(&mut self, current_year: Option<i32>, current_week: Option<i32>) -> WeekTransition {
        self.set_current(current_year, current_week);
        match (self.phase(), current_year, current_week) {
            (NavigatorPhase::Unset, Some(year), Some(week)) => {
                self.view(AcademicWeekRef::new(year, week))
            }
            _ => WeekTransition::Unchanged,
        }
    }

    /// Stays on week 1: the previous academic year is never entered.
    pub fn previous_week(&mut self) -> WeekTransition {
        match self.phase() {
            NavigatorPhase::Viewing(viewed) if viewed.academic_week > 1 => self.view(
                AcademicWeekRef::new(viewed.academic_year, viewed.academic_week - 1),
            ),
            NavigatorPhase::Viewing(_) => WeekTransition::Unchanged,
            NavigatorPhase::Unset => match self.current() {
                Some(current) if current.academic_week > 1 => self.view(AcademicWeekRef::new(
                    current.academic_year,
                    current.academic_week - 1,
                )),
                _ => WeekTransition::Unchanged,
            },
        }
    }

    /// Unbounded; the server flags weeks past the end of the period.
    pub fn next_week(&mut self) -> WeekTransition {
        let base = match self.phase() {
            NavigatorPhase::Viewing(viewed) => viewed,
            NavigatorPhase::Unset => match self.current() {
                Some(current) => current,
                None => return WeekTransition::Unchanged,
            },
        };
        self.view(AcademicWeekRef::new(
            base.academic_year,
            base.academic_week.saturating_add(1),
        ))
    }

    pub fn go_to_current(&mut self) -> WeekTransition {
        match self.current() {
            Some(current) => self.view(current),
            None => WeekTransition::Unchanged,
        }
    }

    /// Adopts the week the server actually computed for a request.
    pub fn reconcile_with_server(&mut self, reported_year: i32, reported_week: i32) -> WeekTransition {
        match self.phase() {
            NavigatorPhase::Viewing(_) => {
                self.view(AcademicWeekRef::new(reported_year, reported_week))
            }
            NavigatorPhase::Unset => WeekTransition::Unchanged,
        }
    }

    pub fn is_current_week(&self) -> bool {
        match (self.viewed(), self.current()) {
            (Some(viewed), Some(current)) => viewed == current,
            _ => false,
        }
    }

    /// Calendar week of the viewed week, `None` without a period anchor
    pub fn calendar_week(&self, period_start: Option<NaiveDate>) -> Option<CalendarWeekRef> {
        converter::to_calendar_week(self.viewed()?, period_start)
    }

    /// Key for a fetch of the viewed week
    pub fn request_key(&self) -> Option<RequestKey> {
        self.viewed()
    }

    /// Whether a response issued under `key` may still be applied
    pub fn accepts(&self, key: RequestKey) -> bool {
        self.viewed() == Some(key)
    }

    fn view(&mut self, to: AcademicWeekRef) -> WeekTransition {
        let from = self.viewed();
        if from == Some(to) {
            return WeekTransition::Unchanged;
        }
        self.viewed_academic_year = Some(to.academic_year);
        self.viewed_academic_week = Some(to.academic_week);
        WeekTransition::Changed { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(year: i32, week: i32) -> AcademicWeekRef {
        AcademicWeekRef::new(year, week)
    }

    fn viewing(year: i32, w: i32) -> NavigatorPhase {
        NavigatorPhase::Viewing(week(year, w))
    }

    fn initialized(year: i32, w: i32) -> NavigatorState {
        let mut state = NavigatorState::new();
        state.initialize(Some(year), Some(w));
        state
    }

    #[test]
    fn test_starts_unset() {
        let state = NavigatorState::new();
        assert_eq!(state.phase(), NavigatorPhase::Unset);
        assert_eq!(state.request_key(), None);
        assert!(!state.is_current_week());
    }

    #[test]
    fn test_next_week_before_initialize_is_noop() {
        let mut state = NavigatorState::new();
        assert_eq!(state.next_week(), WeekTransition::Unchanged);
        assert_eq!(state.previous_week(), WeekTransition::Unchanged);
        assert_eq!(state.go_to_current(), WeekTransition::Unchanged);
        assert_eq!(state.phase(), NavigatorPhase::Unset);
    }

    #[test]
    fn test_initialize() {
        let mut state = NavigatorState::new();
        assert_eq!(
            state.initialize(Some(2025), Some(5)),
            WeekTransition::Changed {
                from: None,
                to: week(2025, 5)
            }
        );
        assert_eq!(state.phase(), viewing(2025, 5));
        assert!(state.is_current_week());
    }

    #[test]
    fn test_initialize_with_missing_data_is_noop() {
        let mut state = NavigatorState::new();
        assert_eq!(state.initialize(Some(2025), None), WeekTransition::Unchanged);
        assert_eq!(state.initialize(None, Some(5)), WeekTransition::Unchanged);
        assert_eq!(state.phase(), NavigatorPhase::Unset);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_initialize_when_viewing_is_noop() {
        let mut state = initialized(2025, 5);
        state.next_week();
        assert_eq!(state.initialize(Some(2025), Some(9)), WeekTransition::Unchanged);
        assert_eq!(state.phase(), viewing(2025, 6));
    }

    #[test]
    fn test_previous_week_stops_at_week_one() {
        let mut state = initialized(2025, 5);
        state.previous_week();
        assert_eq!(state.phase(), viewing(2025, 4));
        for _ in 0..3 {
            assert!(state.previous_week().is_changed());
        }
        assert_eq!(state.phase(), viewing(2025, 1));
        assert_eq!(state.previous_week(), WeekTransition::Unchanged);
        assert_eq!(state.phase(), viewing(2025, 1));
    }

    #[test]
    fn test_next_week_has_no_upper_bound() {
        let mut state = initialized(2025, 52);
        state.next_week();
        state.next_week();
        assert_eq!(state.phase(), viewing(2025, 54));
        assert!(!state.is_current_week());
    }

    #[test]
    fn test_unset_uses_current_week_as_base() {
        let mut state = NavigatorState::new();
        state.set_current(Some(2025), Some(5));
        assert_eq!(state.phase(), NavigatorPhase::Unset);
        state.previous_week();
        assert_eq!(state.phase(), viewing(2025, 4));

        let mut state = NavigatorState::new();
        state.set_current(Some(2025), Some(5));
        state.next_week();
        assert_eq!(state.phase(), viewing(2025, 6));
    }

    #[test]
    fn test_unset_previous_from_first_week_is_noop() {
        let mut state = NavigatorState::new();
        state.set_current(Some(2025), Some(1));
        assert_eq!(state.previous_week(), WeekTransition::Unchanged);
        assert_eq!(state.phase(), NavigatorPhase::Unset);
    }

    #[test]
    fn test_go_to_current() {
        let mut state = initialized(2025, 5);
        state.next_week();
        state.next_week();
        assert_eq!(
            state.go_to_current(),
            WeekTransition::Changed {
                from: Some(week(2025, 7)),
                to: week(2025, 5)
            }
        );
        assert_eq!(state.phase(), viewing(2025, 5));
        assert_eq!(state.go_to_current(), WeekTransition::Unchanged);
    }

    #[test]
    fn test_go_to_current_after_current_moves() {
        let mut state = initialized(2025, 5);
        state.set_current(Some(2025), Some(8));
        assert!(!state.is_current_week());
        state.go_to_current();
        assert_eq!(state.phase(), viewing(2025, 8));
        assert!(state.is_current_week());
    }

    #[test]
    fn test_reconcile_with_server() {
        let mut state = initialized(2025, 5);
        assert!(state.reconcile_with_server(2025, 3).is_changed());
        assert_eq!(state.phase(), viewing(2025, 3));
        assert_eq!(state.reconcile_with_server(2025, 3), WeekTransition::Unchanged);
    }

    #[test]
    fn test_reconcile_while_unset_is_noop() {
        let mut state = NavigatorState::new();
        assert_eq!(state.reconcile_with_server(2025, 3), WeekTransition::Unchanged);
        assert_eq!(state.phase(), NavigatorPhase::Unset);
    }

    #[test]
    fn test_stale_request_key_is_rejected() {
        let mut state = initialized(2025, 5);
        let key = state.request_key().unwrap();
        assert!(state.accepts(key));
        state.next_week();
        assert!(!state.accepts(key));
        assert!(state.accepts(week(2025, 6)));
    }

    #[test]
    fn test_calendar_week_of_viewed_week() {
        let anchor = NaiveDate::from_ymd_opt(2025, 2, 3);
        let mut state = NavigatorState::new();
        assert_eq!(state.calendar_week(anchor), None);
        state.initialize(Some(2025), Some(1));
        assert_eq!(state.calendar_week(anchor), Some(CalendarWeekRef::new(2025, 6)));
        assert_eq!(state.calendar_week(None), None);
    }
}
