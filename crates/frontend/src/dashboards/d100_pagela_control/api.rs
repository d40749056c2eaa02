use contracts::dashboards::d100_pagela_control::{
    CurrentWeek, WeeklyControlRequest, WeeklyControlResponse,
};
use contracts::domain::a001_academic_period::AcademicPeriod;

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/d100";

/// Academic "now" as computed by the server
pub async fn get_current_week() -> Result<CurrentWeek, String> {
    get_json(&format!("{}/current_week", API_BASE))
        .await?
        .ok_or_else(|| "Current week endpoint not found".to_string())
}

/// Period of `year`, `None` when the year has no period
pub async fn get_period(year: i32) -> Result<Option<AcademicPeriod>, String> {
    get_json(&format!("/api/academic-periods/{}", year)).await
}

/// Pagela status of every club for one academic week
pub async fn get_weekly_control(
    request: WeeklyControlRequest,
) -> Result<WeeklyControlResponse, String> {
    let query = serde_qs::to_string(&request)
        .map_err(|e| format!("Failed to encode query: {}", e))?;

    get_json(&format!("{}/weekly_control?{}", API_BASE, query))
        .await?
        .ok_or_else(|| "Weekly control endpoint not found".to_string())
}
