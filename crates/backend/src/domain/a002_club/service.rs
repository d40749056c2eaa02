use contracts::domain::a002_club::{Club, ClubDto, PagelaSubmission};
use contracts::shared::academic_week::weeks_in_period;

use super::repository;
use crate::domain::a001_academic_period;
use crate::shared::data::store::Store;
use crate::shared::error::{ApiError, ApiResult};

pub fn list_all(store: &Store) -> ApiResult<Vec<Club>> {
    Ok(repository::list_all(store)?)
}

/// Registers a club; numbers are unique
pub fn create(store: &Store, dto: ClubDto) -> ApiResult<Club> {
    let name = dto.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Club name is required".to_string()));
    }
    let club = Club::new(dto.number, name);
    if !repository::insert_unique(store, club.clone())? {
        return Err(ApiError::BadRequest(format!(
            "Club number {} is already taken",
            dto.number
        )));
    }
    tracing::info!("Club #{} ({}) registered", club.number, club.name);
    Ok(club)
}

/// Records a pagela after checking the club and that the week lies in the period
pub fn submit_pagela(store: &Store, submission: PagelaSubmission) -> ApiResult<()> {
    let club = repository::get_by_id(store, submission.club_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Club {} not found", submission.club_id)))?;

    let period = a001_academic_period::service::get_by_year(store, submission.year)?;
    let last_week = weeks_in_period(&period);
    if submission.week < 1 || submission.week > last_week {
        return Err(ApiError::BadRequest(format!(
            "Week {} is outside period {} (1..={})",
            submission.week, submission.year, last_week
        )));
    }

    tracing::info!(
        "Pagela received: club #{} ({}), {}/{}",
        club.number,
        club.name,
        submission.year,
        submission.week
    );
    repository::save_pagela(store, submission)?;
    Ok(())
}
