use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("period {year} must start in {year}, got {start}")]
    YearMismatch { year: i32, start: NaiveDate },

    #[error("exception date {date} is outside period {year}")]
    ExceptionOutsidePeriod { year: i32, date: NaiveDate },
}

// ============================================================================
// Aggregate
// ============================================================================

/// Academic period (one per year). `start_date` anchors academic week 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    pub year: i32,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

impl AcademicPeriod {
    pub fn new(year: i32, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, PeriodError> {
        let period = Self {
            year,
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// A period is labeled by the year it starts in
    pub fn validate(&self) -> Result<(), PeriodError> {
        if self.end_date < self.start_date {
            return Err(PeriodError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.start_date.year() != self.year {
            return Err(PeriodError::YearMismatch {
                year: self.year,
                start: self.start_date,
            });
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Body of `PUT /api/academic-periods/:year`; the year comes from the path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicPeriodDto {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

impl AcademicPeriodDto {
    pub fn into_period(self, year: i32) -> Result<AcademicPeriod, PeriodError> {
        AcademicPeriod::new(year, self.start_date, self.end_date)
    }
}

/// A date without club meetings (holiday, recess). The week containing it
/// is not expected to have a pagela.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekException {
    pub date: NaiveDate,
    pub reason: String,
}
