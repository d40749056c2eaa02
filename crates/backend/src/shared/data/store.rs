//! In-memory storage shared by all handlers.
//!
//! Locks are `std::sync::RwLock` and are never held across an `.await`.

use contracts::domain::a001_academic_period::{AcademicPeriod, WeekException};
use contracts::domain::a002_club::{Club, ClubId, PagelaSubmission};
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::shared::config::Config;

static STORE: OnceCell<Store> = OnceCell::new();

/// Pagela key: club + academic year + academic week
pub type PagelaKey = (ClubId, i32, i32);

#[derive(Debug, Default)]
pub struct Store {
    /// Keyed by year: at most one period per year
    pub(crate) periods: RwLock<BTreeMap<i32, AcademicPeriod>>,
    pub(crate) exceptions: RwLock<BTreeMap<i32, Vec<WeekException>>>,
    pub(crate) clubs: RwLock<Vec<Club>>,
    pub(crate) pagelas: RwLock<HashMap<PagelaKey, PagelaSubmission>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding the periods and clubs declared in the config
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = Self::new();
        {
            let mut periods = write(&store.periods)?;
            for seed in &config.periods {
                let period = AcademicPeriod::new(seed.year, seed.start_date, seed.end_date)
                    .map_err(|e| anyhow::anyhow!("Invalid period {} in config: {}", seed.year, e))?;
                periods.insert(period.year, period);
            }
        }
        {
            let mut clubs = write(&store.clubs)?;
            for seed in &config.clubs {
                if clubs.iter().any(|c| c.number == seed.number) {
                    anyhow::bail!("Duplicate club number {} in config", seed.number);
                }
                clubs.push(Club::new(seed.number, seed.name.clone()));
            }
        }
        Ok(store)
    }
}

pub(crate) fn read<T>(lock: &RwLock<T>) -> anyhow::Result<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| anyhow::anyhow!("store lock poisoned"))
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> anyhow::Result<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| anyhow::anyhow!("store lock poisoned"))
}

pub fn initialize_store(config: &Config) -> anyhow::Result<()> {
    let store = Store::from_config(config)?;
    tracing::info!(
        "Store initialized: {} period(s), {} club(s)",
        config.periods.len(),
        config.clubs.len()
    );
    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("Store already initialized"))
}

pub fn get_store() -> &'static Store {
    STORE
        .get()
        .expect("Store has not been initialized")
}
