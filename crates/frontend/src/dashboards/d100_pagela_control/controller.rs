//! Reactive wrapper around [`NavigatorState`].
//!
//! The navigator itself is plain data; this controller owns it in a signal
//! and publishes a week-change counter that views watch to drop their
//! per-week state.

use contracts::dashboards::d100_pagela_control::CurrentWeek;
use contracts::shared::academic_week::{NavigatorState, RequestKey, WeekTransition};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct WeekController {
    pub state: RwSignal<NavigatorState>,
    /// Bumped once per effective week change
    pub week_changes: RwSignal<u64>,
}

impl WeekController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NavigatorState::new()),
            week_changes: RwSignal::new(0),
        }
    }

    pub fn initialize(&self, current: &CurrentWeek) {
        self.apply("initialize", |state| {
            state.initialize(Some(current.academic_year), current.academic_week)
        });
    }

    pub fn previous_week(&self) {
        self.apply("previous_week", NavigatorState::previous_week);
    }

    pub fn next_week(&self) {
        self.apply("next_week", NavigatorState::next_week);
    }

    pub fn go_to_current(&self) {
        self.apply("go_to_current", NavigatorState::go_to_current);
    }

    pub fn reconcile_with_server(&self, year: i32, week: i32) {
        self.apply("reconcile_with_server", |state| {
            state.reconcile_with_server(year, week)
        });
    }

    /// Checked after a fetch completes; stale responses are dropped
    pub fn accepts(&self, key: RequestKey) -> bool {
        self.state.with_untracked(|state| state.accepts(key))
    }

    fn apply(&self, action: &str, transition: impl FnOnce(&mut NavigatorState) -> WeekTransition) {
        let mut next = self.state.get_untracked();
        match transition(&mut next) {
            WeekTransition::Changed { from, to } => {
                log::debug!(
                    "{}: week {} -> {}",
                    action,
                    from.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string()),
                    to
                );
                self.state.set(next);
                self.week_changes.update(|n| *n += 1);
            }
            WeekTransition::Unchanged => {
                // initialize may still have recorded the current week
                if next != self.state.get_untracked() {
                    self.state.set(next);
                }
            }
        }
    }
}

impl Default for WeekController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_week_controller() -> WeekController {
    use_context::<WeekController>().expect("WeekController not found. Provide it in App.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::academic_week::AcademicWeekRef;

    fn current(year: i32, week: i32) -> CurrentWeek {
        CurrentWeek {
            academic_year: year,
            academic_week: Some(week),
            is_within_period: true,
        }
    }

    fn viewed(controller: &WeekController) -> Option<AcademicWeekRef> {
        controller.state.with_untracked(|s| s.viewed())
    }

    fn changes(controller: &WeekController) -> u64 {
        controller.week_changes.get_untracked()
    }

    #[test]
    fn test_counter_bumps_once_per_change() {
        let owner = Owner::new();
        owner.set();
        let controller = WeekController::new();

        controller.initialize(&current(2025, 5));
        assert_eq!(changes(&controller), 1);
        assert_eq!(viewed(&controller), Some(AcademicWeekRef::new(2025, 5)));

        controller.next_week();
        assert_eq!(changes(&controller), 2);
        controller.previous_week();
        assert_eq!(changes(&controller), 3);
        assert_eq!(viewed(&controller), Some(AcademicWeekRef::new(2025, 5)));
    }

    #[test]
    fn test_unchanged_keeps_counter() {
        let owner = Owner::new();
        owner.set();
        let controller = WeekController::new();

        controller.next_week();
        assert_eq!(changes(&controller), 0);

        controller.initialize(&current(2025, 1));
        controller.previous_week();
        controller.go_to_current();
        controller.reconcile_with_server(2025, 1);
        assert_eq!(changes(&controller), 1);
        assert_eq!(viewed(&controller), Some(AcademicWeekRef::new(2025, 1)));
    }

    #[test]
    fn test_initialize_while_viewing_records_current_week() {
        let owner = Owner::new();
        owner.set();
        let controller = WeekController::new();

        controller.initialize(&current(2025, 5));
        controller.next_week();
        controller.initialize(&current(2025, 9));

        assert_eq!(changes(&controller), 2);
        assert_eq!(viewed(&controller), Some(AcademicWeekRef::new(2025, 6)));
        assert_eq!(
            controller.state.with_untracked(|s| s.current()),
            Some(AcademicWeekRef::new(2025, 9))
        );

        controller.go_to_current();
        assert_eq!(changes(&controller), 3);
        assert_eq!(viewed(&controller), Some(AcademicWeekRef::new(2025, 9)));
    }

    #[test]
    fn test_reconcile_to_other_week_is_a_change() {
        let owner = Owner::new();
        owner.set();
        let controller = WeekController::new();

        controller.initialize(&current(2025, 5));
        controller.reconcile_with_server(2025, 7);

        assert_eq!(changes(&controller), 2);
        assert_eq!(viewed(&controller), Some(AcademicWeekRef::new(2025, 7)));
        assert!(!controller.accepts(AcademicWeekRef::new(2025, 5)));
        assert!(controller.accepts(AcademicWeekRef::new(2025, 7)));
    }
}
