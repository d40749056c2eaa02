use axum::extract::Query;
use axum::Json;
use chrono::Utc;
use contracts::dashboards::d100_pagela_control::{
    CurrentWeek, WeeklyControlRequest, WeeklyControlResponse,
};

use crate::dashboards::d100_pagela_control::service;
use crate::shared::config;
use crate::shared::data::store::get_store;
use crate::shared::error::ApiResult;

/// GET /api/d100/current_week
pub async fn get_current_week() -> ApiResult<Json<CurrentWeek>> {
    let offset = config::get_config().calendar.offset()?;
    let today = Utc::now().with_timezone(&offset).date_naive();
    Ok(Json(service::current_week(get_store(), today)?))
}

/// GET /api/d100/weekly_control?year=2025&week=5
pub async fn get_weekly_control(
    Query(request): Query<WeeklyControlRequest>,
) -> ApiResult<Json<WeeklyControlResponse>> {
    Ok(Json(service::weekly_control(get_store(), request)?))
}
