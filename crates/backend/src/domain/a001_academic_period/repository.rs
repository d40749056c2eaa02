use chrono::NaiveDate;
use contracts::domain::a001_academic_period::{AcademicPeriod, WeekException};

use crate::shared::data::store::{read, write, Store};

/// All periods ordered by year
pub fn list_all(store: &Store) -> anyhow::Result<Vec<AcademicPeriod>> {
    Ok(read(&store.periods)?.values().cloned().collect())
}

pub fn get_by_year(store: &Store, year: i32) -> anyhow::Result<Option<AcademicPeriod>> {
    Ok(read(&store.periods)?.get(&year).cloned())
}

/// Inserts or replaces the period of `period.year`
pub fn upsert(store: &Store, period: AcademicPeriod) -> anyhow::Result<()> {
    write(&store.periods)?.insert(period.year, period);
    Ok(())
}

/// Removes the period and its exceptions. Returns false if absent.
///
/// The periods guard is held until the exceptions are gone.
pub fn delete(store: &Store, year: i32) -> anyhow::Result<bool> {
    let mut periods = write(&store.periods)?;
    if periods.remove(&year).is_none() {
        return Ok(false);
    }
    write(&store.exceptions)?.remove(&year);
    Ok(true)
}

/// Exceptions of a period ordered by date
pub fn list_exceptions(store: &Store, year: i32) -> anyhow::Result<Vec<WeekException>> {
    let mut items = read(&store.exceptions)?
        .get(&year)
        .cloned()
        .unwrap_or_default();
    items.sort_by_key(|e| e.date);
    Ok(items)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionWrite {
    Saved,
    NoPeriod,
    OutsidePeriod,
}

/// One exception per date; a second one for the same date replaces the first.
///
/// The period is checked under a periods read guard held across the write,
/// so a concurrent `delete` cannot leave the exception orphaned.
pub fn upsert_exception(
    store: &Store,
    year: i32,
    exception: WeekException,
) -> anyhow::Result<ExceptionWrite> {
    let periods = read(&store.periods)?;
    let Some(period) = periods.get(&year) else {
        return Ok(ExceptionWrite::NoPeriod);
    };
    if !period.contains(exception.date) {
        return Ok(ExceptionWrite::OutsidePeriod);
    }

    let mut exceptions = write(&store.exceptions)?;
    let items = exceptions.entry(year).or_default();
    items.retain(|e| e.date != exception.date);
    items.push(exception);
    Ok(ExceptionWrite::Saved)
}

pub fn delete_exception(store: &Store, year: i32, date: NaiveDate) -> anyhow::Result<bool> {
    let mut exceptions = write(&store.exceptions)?;
    let Some(items) = exceptions.get_mut(&year) else {
        return Ok(false);
    };
    let before = items.len();
    items.retain(|e| e.date != date);
    Ok(items.len() != before)
}
