//! Weekly leaderboard tiers, per-rank payouts and the weekly reset clock.

use crate::params::{BASIC_LAST_RANK, TOP100_LAST_RANK};
use crate::types::{Coins, CustomRewardTier, Rank, RankRewardSchedule};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fixed payout band a rank falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    First,
    Second,
    Third,
    /// Ranks 4-100
    Top100,
    /// Ranks 101-500
    Basic,
    /// Outside the fixed bands; only custom tiers can pay these ranks
    Unranked,
}

impl RankTier {
    pub fn of(rank: Rank) -> Self {
        match rank {
            1 => RankTier::First,
            2 => RankTier::Second,
            3 => RankTier::Third,
            4..=TOP100_LAST_RANK => RankTier::Top100,
            r if r > TOP100_LAST_RANK && r <= BASIC_LAST_RANK => RankTier::Basic,
            _ => RankTier::Unranked,
        }
    }

    /// Per-recipient reward of this band; `None` for unranked
    pub fn reward(&self, schedule: &RankRewardSchedule) -> Option<Coins> {
        match self {
            RankTier::First => Some(schedule.first),
            RankTier::Second => Some(schedule.second),
            RankTier::Third => Some(schedule.third),
            RankTier::Top100 => Some(schedule.top100),
            RankTier::Basic => Some(schedule.basic),
            RankTier::Unranked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankTier::First => "1st",
            RankTier::Second => "2nd",
            RankTier::Third => "3rd",
            RankTier::Top100 => "TOP 100",
            RankTier::Basic => "101-500",
            RankTier::Unranked => "unranked",
        }
    }
}

/// MPcoin paid to a single rank at the weekly reset.
///
/// Fixed bands always win for ranks 1-500; overlapping custom tiers are not
/// consulted there. Beyond 500 the first custom tier covering the rank pays.
pub fn reward_for_rank(
    schedule: &RankRewardSchedule,
    custom_tiers: &[CustomRewardTier],
    rank: Rank,
) -> Coins {
    if let Some(reward) = RankTier::of(rank).reward(schedule) {
        return reward;
    }
    custom_tiers
        .iter()
        .find(|tier| tier.covers(rank))
        .map(|tier| tier.reward)
        .unwrap_or(0)
}

/// Time left until the leaderboard resets at Sunday 23:59:59.999.
///
/// On a Sunday the reset counted is the following week's.
pub fn time_until_weekly_reset(now: NaiveDateTime) -> Duration {
    let days_ahead = 7 - i64::from(now.weekday().num_days_from_sunday());
    let reset_day = now.date() + Duration::days(days_ahead);
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    reset_day.and_time(end_of_day) - now
}

/// `Nd Nh Nm Ns`, truncating each unit
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}
