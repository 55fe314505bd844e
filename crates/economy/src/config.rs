//! Dashboard configuration file
//!
//! A TOML document describing a developer's balance and reward setup:
//!
//! ```toml
//! available_balance = 15000
//!
//! [schedule]
//! first = 1000
//! second = 500
//! third = 250
//! top100 = 100
//! basic = 50
//!
//! [[custom_tiers]]
//! id = "tier-1"
//! kind = "range"
//! start_rank = 501
//! end_rank = 1000
//! reward = 10
//!
//! [[achievements]]
//! id = "1"
//! name = "First Play"
//! reward = 100
//!
//! [logging]
//! level = "info"
//! ```

use crate::errors::{EconomyError, Result};
use crate::params::{DEFAULT_DEVELOPER_BALANCE, MAX_CUSTOM_TIERS};
use crate::types::{Achievement, Coins, CustomRewardTier, RankRewardSchedule, RewardConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_available_balance")]
    pub available_balance: Coins,
    #[serde(default)]
    pub schedule: RankRewardSchedule,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_tiers: Vec<CustomRewardTier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_available_balance() -> Coins {
    DEFAULT_DEVELOPER_BALANCE
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let rewards = RewardConfig::default();
        Self {
            available_balance: DEFAULT_DEVELOPER_BALANCE,
            schedule: rewards.schedule,
            custom_tiers: rewards.custom_tiers,
            achievements: rewards.achievements,
            logging: LoggingConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            target: "economy",
            path = %path.display(),
            tiers = config.custom_tiers.len(),
            achievements = config.achievements.len(),
            "dashboard configuration loaded"
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EconomyError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.custom_tiers.len() > MAX_CUSTOM_TIERS {
            return Err(EconomyError::InvalidConfig(format!(
                "{} custom tiers configured, at most {} allowed",
                self.custom_tiers.len(),
                MAX_CUSTOM_TIERS
            )));
        }

        let mut seen = HashSet::new();
        let ids = self
            .custom_tiers
            .iter()
            .map(|t| t.id.as_str())
            .chain(self.achievements.iter().map(|a| a.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(EconomyError::InvalidConfig(format!("duplicate id {id}")));
            }
        }

        if self.available_balance < 0 {
            warn!(
                target: "economy",
                balance = self.available_balance,
                "negative available balance configured"
            );
        }
        Ok(())
    }

    /// Reward part of the configuration
    pub fn rewards(&self) -> RewardConfig {
        RewardConfig {
            schedule: self.schedule,
            custom_tiers: self.custom_tiers.clone(),
            achievements: self.achievements.clone(),
        }
    }
}
