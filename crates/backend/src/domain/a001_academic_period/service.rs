use chrono::NaiveDate;
use contracts::domain::a001_academic_period::{
    AcademicPeriod, AcademicPeriodDto, PeriodError, WeekException,
};

use super::repository::{self, ExceptionWrite};
use crate::shared::data::store::Store;
use crate::shared::error::{ApiError, ApiResult};

pub fn list_all(store: &Store) -> ApiResult<Vec<AcademicPeriod>> {
    Ok(repository::list_all(store)?)
}

pub fn get_by_year(store: &Store, year: i32) -> ApiResult<AcademicPeriod> {
    repository::get_by_year(store, year)?
        .ok_or_else(|| ApiError::NotFound(format!("Academic period {} not found", year)))
}

/// Creates or replaces the period of `year`
pub fn save(store: &Store, year: i32, dto: AcademicPeriodDto) -> ApiResult<AcademicPeriod> {
    let period = dto.into_period(year)?;
    let replaced = repository::get_by_year(store, year)?.is_some();
    repository::upsert(store, period.clone())?;
    tracing::info!(
        "Academic period {} {}: {} .. {}",
        year,
        if replaced { "updated" } else { "created" },
        period.start_date,
        period.end_date
    );
    Ok(period)
}

pub fn delete(store: &Store, year: i32) -> ApiResult<()> {
    if !repository::delete(store, year)? {
        return Err(ApiError::NotFound(format!("Academic period {} not found", year)));
    }
    tracing::info!("Academic period {} deleted", year);
    Ok(())
}

pub fn list_exceptions(store: &Store, year: i32) -> ApiResult<Vec<WeekException>> {
    get_by_year(store, year)?;
    Ok(repository::list_exceptions(store, year)?)
}

pub fn add_exception(store: &Store, year: i32, exception: WeekException) -> ApiResult<WeekException> {
    match repository::upsert_exception(store, year, exception.clone())? {
        ExceptionWrite::Saved => Ok(exception),
        ExceptionWrite::NoPeriod => Err(ApiError::NotFound(format!(
            "Academic period {} not found",
            year
        ))),
        ExceptionWrite::OutsidePeriod => Err(PeriodError::ExceptionOutsidePeriod {
            year,
            date: exception.date,
        }
        .into()),
    }
}

pub fn delete_exception(store: &Store, year: i32, date: NaiveDate) -> ApiResult<()> {
    if !repository::delete_exception(store, year, date)? {
        return Err(ApiError::NotFound(format!(
            "No exception on {} in period {}",
            date, year
        )));
    }
    Ok(())
}
