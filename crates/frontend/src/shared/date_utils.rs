/// Utilities for date and time formatting
///
/// Dates are shown the way coordinators write them: DD/MM/YYYY
use chrono::{DateTime, NaiveDate, Utc};

/// Example: 2025-03-15 -> "15/03/2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Example: "15/03/2025 14:02"
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

/// Monday..Sunday range of a week, "—" when either end is unknown
pub fn format_week_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} – {}", format_date(start), format_date(end)),
        _ => "—".to_string(),
    }
}
