use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use contracts::domain::a001_academic_period::{AcademicPeriod, AcademicPeriodDto, WeekException};

use crate::domain::a001_academic_period::service;
use crate::shared::data::store::get_store;
use crate::shared::error::ApiResult;

/// GET /api/academic-periods
pub async fn list_all() -> ApiResult<Json<Vec<AcademicPeriod>>> {
    Ok(Json(service::list_all(get_store())?))
}

/// GET /api/academic-periods/:year
pub async fn get_by_year(Path(year): Path<i32>) -> ApiResult<Json<AcademicPeriod>> {
    Ok(Json(service::get_by_year(get_store(), year)?))
}

/// PUT /api/academic-periods/:year
pub async fn save(
    Path(year): Path<i32>,
    Json(dto): Json<AcademicPeriodDto>,
) -> ApiResult<Json<AcademicPeriod>> {
    Ok(Json(service::save(get_store(), year, dto)?))
}

/// DELETE /api/academic-periods/:year
pub async fn delete(Path(year): Path<i32>) -> ApiResult<StatusCode> {
    service::delete(get_store(), year)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/academic-periods/:year/exceptions
pub async fn list_exceptions(Path(year): Path<i32>) -> ApiResult<Json<Vec<WeekException>>> {
    Ok(Json(service::list_exceptions(get_store(), year)?))
}

/// POST /api/academic-periods/:year/exceptions
pub async fn add_exception(
    Path(year): Path<i32>,
    Json(exception): Json<WeekException>,
) -> ApiResult<Json<WeekException>> {
    Ok(Json(service::add_exception(get_store(), year, exception)?))
}

/// DELETE /api/academic-periods/:year/exceptions/:date
pub async fn delete_exception(
    Path((year, date)): Path<(i32, NaiveDate)>,
) -> ApiResult<StatusCode> {
    service::delete_exception(get_store(), year, date)?;
    Ok(StatusCode::NO_CONTENT)
}
