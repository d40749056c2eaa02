use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_club::ClubId;
use crate::shared::academic_week::CalendarWeekRef;

/// Server-side "now" in academic terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentWeek {
    #[serde(rename = "academicYear")]
    pub academic_year: i32,
    /// None when no period is configured
    #[serde(rename = "academicWeek")]
    pub academic_week: Option<i32>,
    #[serde(rename = "isWithinPeriod")]
    pub is_within_period: bool,
}

/// Query of `GET /api/d100/weekly_control`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyControlRequest {
    pub year: i32,
    pub week: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    InPeriod,
    OutOfPeriod,
    NoPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagelaStatus {
    /// Pagela received for the week
    Ok,
    Missing,
    /// Week has a no-meeting date, nothing expected
    Exception,
    OutOfPeriod,
    NoPeriod,
}

impl PagelaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PagelaStatus::Ok => "Em dia",
            PagelaStatus::Missing => "Pendente",
            PagelaStatus::Exception => "Sem encontro",
            PagelaStatus::OutOfPeriod => "Fora do período",
            PagelaStatus::NoPeriod => "Sem período",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubWeeklyStatus {
    #[serde(rename = "clubId")]
    pub club_id: ClubId,
    #[serde(rename = "clubNumber")]
    pub club_number: u32,
    #[serde(rename = "clubName")]
    pub club_name: String,
    pub status: PagelaStatus,
    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Weekly control for all clubs.
///
/// `year`/`week` echo the week the server actually computed, which may differ
/// from the request (weeks below 1 are normalized to 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyControlResponse {
    pub year: i32,
    pub week: i32,
    #[serde(rename = "calendarWeek")]
    pub calendar_week: Option<CalendarWeekRef>,
    #[serde(rename = "periodStatus")]
    pub period_status: PeriodStatus,
    #[serde(rename = "periodStart")]
    pub period_start: Option<NaiveDate>,
    #[serde(rename = "weekStart")]
    pub week_start: Option<NaiveDate>,
    #[serde(rename = "weekEnd")]
    pub week_end: Option<NaiveDate>,
    pub clubs: Vec<ClubWeeklyStatus>,
}

impl WeeklyControlResponse {
    pub fn count(&self, status: PagelaStatus) -> usize {
        self.clubs.iter().filter(|c| c.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&PagelaStatus::OutOfPeriod).unwrap(),
            "\"out_of_period\""
        );
        assert_eq!(
            serde_json::from_str::<PeriodStatus>("\"no_period\"").unwrap(),
            PeriodStatus::NoPeriod
        );
    }

    #[test]
    fn test_current_week_without_period() {
        let json = r#"{"academicYear":2025,"academicWeek":null,"isWithinPeriod":false}"#;
        let current: CurrentWeek = serde_json::from_str(json).unwrap();
        assert_eq!(current.academic_week, None);
        assert!(!current.is_within_period);
    }
}
