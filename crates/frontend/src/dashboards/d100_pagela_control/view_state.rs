//! Per-week UI state of the control table.
//!
//! Everything here belongs to the week on screen and is reset whenever the
//! navigator reports a week change.

use std::collections::HashSet;

use contracts::dashboards::d100_pagela_control::{ClubWeeklyStatus, PagelaStatus};
use contracts::domain::a002_club::ClubId;
use contracts::shared::academic_week::{AcademicWeekRef, CalendarWeekRef};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekViewState {
    pub expanded: HashSet<ClubId>,
    pub page: usize,
    pub page_size: usize,
    pub status_filter: Option<PagelaStatus>,
    pub search: String,
    /// Load failure shown in the banner
    pub error: Option<String>,
}

impl Default for WeekViewState {
    fn default() -> Self {
        Self {
            expanded: HashSet::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            status_filter: None,
            search: String::new(),
            error: None,
        }
    }
}

impl WeekViewState {
    /// Drops expansion, paging and the load error. Filters and page size are
    /// user preferences and survive.
    pub fn reset_for_new_week(&mut self) {
        self.expanded.clear();
        self.page = 0;
        self.error = None;
    }

    pub fn toggle(&mut self, club_id: ClubId) {
        if !self.expanded.remove(&club_id) {
            self.expanded.insert(club_id);
        }
    }

    pub fn is_expanded(&self, club_id: ClubId) -> bool {
        self.expanded.contains(&club_id)
    }

    pub fn set_status_filter(&mut self, status: Option<PagelaStatus>) {
        self.status_filter = status;
        self.page = 0;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Clubs matching the status filter and the search text (name or number)
    pub fn filtered<'a>(&self, clubs: &'a [ClubWeeklyStatus]) -> Vec<&'a ClubWeeklyStatus> {
        let needle = self.search.trim().to_lowercase();
        clubs
            .iter()
            .filter(|c| self.status_filter.map_or(true, |s| c.status == s))
            .filter(|c| {
                needle.is_empty()
                    || c.club_name.to_lowercase().contains(&needle)
                    || c.club_number.to_string() == needle
            })
            .collect()
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size.max(1))
    }

    /// Rows of the current page; the page is clamped to the last one
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let size = self.page_size.max(1);
        let last_page = self.total_pages(rows.len()).saturating_sub(1);
        let start = self.page.min(last_page) * size;
        let end = (start + size).min(rows.len());
        &rows[start.min(rows.len())..end]
    }
}

/// Header label, e.g. "Semana 5 · 2025-W10". Without a period anchor the
/// calendar part is omitted.
pub fn week_label(viewed: Option<AcademicWeekRef>, calendar: Option<CalendarWeekRef>) -> String {
    match (viewed, calendar) {
        (Some(viewed), Some(calendar)) => {
            format!("Semana {} · {}", viewed.academic_week, calendar)
        }
        (Some(viewed), None) => format!("Semana {} / {}", viewed.academic_week, viewed.academic_year),
        (None, _) => "—".to_string(),
    }
}

/// Parses the value of the status filter select ("" or unknown = all).
///
/// The select only offers `ok`, `missing` and `exception`: out-of-period and
/// no-period weeks give every club the same status.
pub fn parse_status_filter(value: &str) -> Option<PagelaStatus> {
    match value {
        "ok" => Some(PagelaStatus::Ok),
        "missing" => Some(PagelaStatus::Missing),
        "exception" => Some(PagelaStatus::Exception),
        "out_of_period" => Some(PagelaStatus::OutOfPeriod),
        "no_period" => Some(PagelaStatus::NoPeriod),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(number: u32, name: &str, status: PagelaStatus) -> ClubWeeklyStatus {
        ClubWeeklyStatus {
            club_id: ClubId::new_v4(),
            club_number: number,
            club_name: name.to_string(),
            status,
            submitted_at: None,
        }
    }

    fn clubs() -> Vec<ClubWeeklyStatus> {
        vec![
            club(1, "Clubinho Centro", PagelaStatus::Ok),
            club(2, "Clubinho Vila Nova", PagelaStatus::Missing),
            club(7, "Clubinho Jardim", PagelaStatus::Missing),
        ]
    }

    #[test]
    fn test_reset_clears_error_and_keeps_filters() {
        let mut state = WeekViewState::default();
        let id = ClubId::new_v4();
        state.toggle(id);
        state.set_status_filter(Some(PagelaStatus::Missing));
        state.page = 3;
        state.error = Some("HTTP error: 500".to_string());

        state.reset_for_new_week();

        assert!(state.expanded.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.page, 0);
        assert_eq!(state.status_filter, Some(PagelaStatus::Missing));
    }

    #[test]
    fn test_toggle() {
        let mut state = WeekViewState::default();
        let id = ClubId::new_v4();
        state.toggle(id);
        assert!(state.is_expanded(id));
        state.toggle(id);
        assert!(!state.is_expanded(id));
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let clubs = clubs();
        let mut state = WeekViewState::default();

        state.set_status_filter(Some(PagelaStatus::Missing));
        assert_eq!(state.filtered(&clubs).len(), 2);

        state.set_search("jardim");
        let found = state.filtered(&clubs);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].club_number, 7);

        state.set_status_filter(None);
        state.set_search("1");
        assert_eq!(state.filtered(&clubs)[0].club_name, "Clubinho Centro");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = WeekViewState::default();
        state.page = 2;
        state.set_search("x");
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_paging() {
        let rows: Vec<usize> = (0..23).collect();
        let mut state = WeekViewState::default();
        assert_eq!(state.total_pages(rows.len()), 3);
        assert_eq!(state.total_pages(0), 0);

        state.page = 2;
        assert_eq!(state.page_slice(&rows), &[20, 21, 22]);

        state.page = 9;
        assert_eq!(state.page_slice(&rows), &[20, 21, 22]);

        let empty: Vec<usize> = Vec::new();
        assert!(state.page_slice(&empty).is_empty());
    }

    #[test]
    fn test_week_label() {
        let viewed = Some(AcademicWeekRef::new(2025, 5));
        assert_eq!(
            week_label(viewed, Some(CalendarWeekRef::new(2025, 10))),
            "Semana 5 · 2025-W10"
        );
        assert_eq!(week_label(viewed, None), "Semana 5 / 2025");
        assert_eq!(week_label(None, None), "—");
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter("missing"), Some(PagelaStatus::Missing));
        assert_eq!(parse_status_filter("no_period"), Some(PagelaStatus::NoPeriod));
        assert_eq!(parse_status_filter(""), None);
        assert_eq!(parse_status_filter("todos"), None);
    }
}
