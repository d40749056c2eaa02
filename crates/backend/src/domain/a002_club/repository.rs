use contracts::domain::a002_club::{Club, ClubId, PagelaSubmission};

use crate::shared::data::store::{read, write, Store};

/// All clubs ordered by number
pub fn list_all(store: &Store) -> anyhow::Result<Vec<Club>> {
    let mut clubs = read(&store.clubs)?.clone();
    clubs.sort_by_key(|c| c.number);
    Ok(clubs)
}

pub fn get_by_id(store: &Store, id: ClubId) -> anyhow::Result<Option<Club>> {
    Ok(read(&store.clubs)?.iter().find(|c| c.id == id).cloned())
}

/// Adds the club unless its number is taken. Check and push share one write
/// guard. Returns false if the number is already registered.
pub fn insert_unique(store: &Store, club: Club) -> anyhow::Result<bool> {
    let mut clubs = write(&store.clubs)?;
    if clubs.iter().any(|c| c.number == club.number) {
        return Ok(false);
    }
    clubs.push(club);
    Ok(true)
}

/// Stores a pagela; a resubmission for the same week replaces the previous one
pub fn save_pagela(store: &Store, submission: PagelaSubmission) -> anyhow::Result<()> {
    let key = (submission.club_id, submission.year, submission.week);
    write(&store.pagelas)?.insert(key, submission);
    Ok(())
}

/// Pagelas of one academic week
pub fn pagelas_for_week(store: &Store, year: i32, week: i32) -> anyhow::Result<Vec<PagelaSubmission>> {
    Ok(read(&store.pagelas)?
        .values()
        .filter(|p| p.year == year && p.week == week)
        .cloned()
        .collect())
}
