use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_club::{Club, ClubDto, PagelaSubmission};

use crate::domain::a002_club::service;
use crate::shared::data::store::get_store;
use crate::shared::error::ApiResult;

/// GET /api/clubs
pub async fn list_all() -> ApiResult<Json<Vec<Club>>> {
    Ok(Json(service::list_all(get_store())?))
}

/// POST /api/clubs
pub async fn create(Json(dto): Json<ClubDto>) -> ApiResult<Json<Club>> {
    Ok(Json(service::create(get_store(), dto)?))
}

/// POST /api/pagelas
pub async fn submit_pagela(Json(submission): Json<PagelaSubmission>) -> ApiResult<StatusCode> {
    service::submit_pagela(get_store(), submission)?;
    Ok(StatusCode::NO_CONTENT)
}
