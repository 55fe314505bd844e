//! Fixed economy policy constants.
//!
//! These values are portal policy, not operator configuration. Calculators
//! reference them directly so a budget computed anywhere matches the one shown
//! on the dashboard.

use crate::types::Coins;

// =============================================================================
// WEEKLY RANKING
// =============================================================================

/// Recipients assumed for the `top100` tier (ranks 4-100).
pub const TOP100_RECIPIENTS: i64 = 97;

/// Recipients assumed for the `basic` tier (ranks 101-500).
pub const BASIC_RECIPIENTS: i64 = 400;

/// Last rank paid by the `top100` tier.
pub const TOP100_LAST_RANK: u32 = 100;

/// Last rank paid by the `basic` tier.
pub const BASIC_LAST_RANK: u32 = 500;

/// Custom tiers a single configuration may hold.
pub const MAX_CUSTOM_TIERS: usize = 2;

/// Placeholder rank range of a newly added custom tier.
pub const DEFAULT_TIER_START_RANK: u32 = 501;
pub const DEFAULT_TIER_END_RANK: u32 = 1000;

/// Placeholder per-rank reward of a newly added custom tier.
pub const DEFAULT_TIER_REWARD: Coins = 10;

// =============================================================================
// ACHIEVEMENTS
// =============================================================================

/// Users assumed to claim every achievement when budgeting.
pub const EXPECTED_CLAIMANTS: i64 = 100;

/// Surcharge on the achievement base total, in percent.
pub const ACHIEVEMENT_OVERHEAD_PERCENT: i64 = 10;

/// Reward of a newly added achievement.
pub const DEFAULT_ACHIEVEMENT_REWARD: Coins = 100;

// =============================================================================
// CHARGES
// =============================================================================

/// Currency units (won) per MPcoin.
pub const WON_PER_COIN: u64 = 10;

// =============================================================================
// BALANCES AND PLAYER REWARDS
// =============================================================================

/// Starting MPcoin balance of a developer account.
pub const DEFAULT_DEVELOPER_BALANCE: Coins = 15_000;

/// Starting MPcoin balance of a player account.
pub const DEFAULT_PLAYER_BALANCE: Coins = 5_000;

/// Credited the first time a player starts a given game.
pub const FIRST_PLAY_REWARD: Coins = 200;

/// Debited for every replay of an already played game.
pub const REPLAY_COST: Coins = 50;

/// Credited to a developer for uploading a new game.
pub const GAME_UPLOAD_BONUS: Coins = 1_000;

/// Reward for the first day of a login streak.
pub const LOGIN_BASE_REWARD: Coins = 100;

/// Extra reward per consecutive login day after the first.
pub const LOGIN_STREAK_STEP: Coins = 10;

// =============================================================================
// GAME CATALOG
// =============================================================================

/// Most games shown on the portal home page after filtering.
pub const MAX_DISPLAYED_GAMES: usize = 12;

/// Games per home page shelf (BEST, NEW, then the rest).
pub const SHELF_SIZE: usize = 4;
