use crate::types::{Coins, GameId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the stateful parts of the economy (sessions, wallets, config).
///
/// The calculators themselves are total and never fail.
#[derive(Debug, Error)]
pub enum EconomyError {
    #[error("custom tier limit reached: at most {max} custom tiers may be configured")]
    CustomTierLimit { max: usize },

    #[error("no custom tier with id {0}")]
    UnknownCustomTier(String),

    #[error("no achievement with id {0}")]
    UnknownAchievement(String),

    #[error("reward liability {total} exceeds available balance {available} by {deficit}")]
    OverBudget {
        total: Decimal,
        available: Coins,
        deficit: Decimal,
    },

    #[error("insufficient MPcoin: required {required}, available {available}")]
    InsufficientCoins { required: Coins, available: Coins },

    #[error("wallet amounts must be non-negative, got {0}")]
    NegativeAmount(Coins),

    #[error("no game with id {0}")]
    UnknownGame(GameId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to parse game catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("key-value store failure: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EconomyError>;
