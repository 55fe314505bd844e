//! Daily login streak and login reward
//!
//! The streak lives in a host-owned string key-value store (browser storage
//! in the portal) under two keys. Only the first check-in of a day pays.

use crate::errors::Result;
use crate::params::{LOGIN_BASE_REWARD, LOGIN_STREAK_STEP};
use crate::types::Coins;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use tracing::{debug, info};

pub const LAST_LOGIN_DATE_KEY: &str = "lastLoginDate";
pub const CONSECUTIVE_LOGIN_DAYS_KEY: &str = "consecutiveLoginDays";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// String key-value storage owned by the host
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Result of a check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub consecutive_days: u32,
    /// `None` when the day was already rewarded
    pub reward: Option<Coins>,
}

/// `100 + (days - 1) × 10`
pub fn login_reward(consecutive_days: u32) -> Coins {
    let extra_days = Coins::from(consecutive_days.saturating_sub(1));
    LOGIN_BASE_REWARD.saturating_add(extra_days.saturating_mul(LOGIN_STREAK_STEP))
}

fn stored_days(store: &dyn KeyValueStore) -> Result<u32> {
    Ok(store
        .get(CONSECUTIVE_LOGIN_DAYS_KEY)?
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(1))
}

/// Record a login on `today` and compute its reward.
///
/// - same day as the stored date: no reward, streak read back
/// - stored date is yesterday: streak extends by one
/// - anything else (first login, gap, unreadable date): streak restarts at 1
pub fn check_in(store: &mut dyn KeyValueStore, today: NaiveDate) -> Result<LoginOutcome> {
    let last_login = store
        .get(LAST_LOGIN_DATE_KEY)?
        .and_then(|value| NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok());

    if last_login == Some(today) {
        let consecutive_days = stored_days(store)?;
        debug!(target: "economy", consecutive_days, "login already rewarded today");
        return Ok(LoginOutcome {
            consecutive_days,
            reward: None,
        });
    }

    let consecutive_days = if last_login == Some(today - Duration::days(1)) {
        stored_days(store)?.saturating_add(1)
    } else {
        1
    };
    let reward = login_reward(consecutive_days);

    store.set(LAST_LOGIN_DATE_KEY, &today.format(DATE_FORMAT).to_string())?;
    store.set(CONSECUTIVE_LOGIN_DAYS_KEY, &consecutive_days.to_string())?;

    info!(
        target: "economy",
        consecutive_days,
        reward,
        "login reward granted"
    );

    Ok(LoginOutcome {
        consecutive_days,
        reward: Some(reward),
    })
}
