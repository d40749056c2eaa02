use serde::{Deserialize, Serialize};
use std::fmt;

/// Week counted from the start of an academic period (week 1 = week containing `start_date`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AcademicWeekRef {
    pub academic_year: i32,
    pub academic_week: i32,
}

impl AcademicWeekRef {
    pub fn new(academic_year: i32, academic_week: i32) -> Self {
        Self {
            academic_year,
            academic_week,
        }
    }
}

impl fmt::Display for AcademicWeekRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.academic_year, self.academic_week)
    }
}

/// ISO-8601 calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarWeekRef {
    pub year: i32,
    pub week: u32,
}

impl CalendarWeekRef {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }
}

/// Formats as `2025-W06`
impl fmt::Display for CalendarWeekRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}
