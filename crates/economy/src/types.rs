//! Core types for the MPcoin reward configuration

use crate::params::{
    DEFAULT_ACHIEVEMENT_REWARD, DEFAULT_TIER_END_RANK, DEFAULT_TIER_REWARD,
    DEFAULT_TIER_START_RANK, MAX_CUSTOM_TIERS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// MPcoin amount. Signed: negative rewards are not rejected by the calculators.
pub type Coins = i64;

/// Real-currency amount in won
pub type Won = u64;

/// Leaderboard position, 1-based
pub type Rank = u32;

pub type GameId = u64;

/// Fixed-tier weekly payout schedule.
///
/// `Default` is the portal's initial schedule. Fields missing from a
/// serialized schedule read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRewardSchedule {
    #[serde(default)]
    pub first: Coins,
    #[serde(default)]
    pub second: Coins,
    #[serde(default)]
    pub third: Coins,
    /// Paid to each of ranks 4-100
    #[serde(default)]
    pub top100: Coins,
    /// Paid to each of ranks 101-500
    #[serde(default)]
    pub basic: Coins,
}

impl Default for RankRewardSchedule {
    fn default() -> Self {
        Self {
            first: 1_000,
            second: 500,
            third: 250,
            top100: 100,
            basic: 50,
        }
    }
}

impl RankRewardSchedule {
    /// Schedule paying nothing at any rank
    pub fn zero() -> Self {
        Self {
            first: 0,
            second: 0,
            third: 0,
            top100: 0,
            basic: 0,
        }
    }
}

/// Shape of a custom tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    /// Contiguous rank interval `[start_rank, end_rank]`
    Range,
    /// Explicit set of ranks
    Specific,
}

/// Operator-defined payout rule supplementing the fixed tiers.
///
/// Both shapes keep their fields side by side so that switching `kind`
/// while editing does not discard the other shape's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRewardTier {
    pub id: String,
    pub kind: TierKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_rank: Option<Rank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_rank: Option<Rank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_ranks: Option<BTreeSet<Rank>>,
    #[serde(default)]
    pub reward: Coins,
}

impl CustomRewardTier {
    /// New tier with the dashboard's placeholder values (ranks 501-1000, 10 MPcoin).
    pub fn new(id: impl Into<String>) -> Self {
        Self::range(
            id,
            DEFAULT_TIER_START_RANK,
            DEFAULT_TIER_END_RANK,
            DEFAULT_TIER_REWARD,
        )
    }

    pub fn range(id: impl Into<String>, start_rank: Rank, end_rank: Rank, reward: Coins) -> Self {
        Self {
            id: id.into(),
            kind: TierKind::Range,
            start_rank: Some(start_rank),
            end_rank: Some(end_rank),
            specific_ranks: None,
            reward,
        }
    }

    pub fn specific(
        id: impl Into<String>,
        ranks: impl IntoIterator<Item = Rank>,
        reward: Coins,
    ) -> Self {
        Self {
            id: id.into(),
            kind: TierKind::Specific,
            start_rank: None,
            end_rank: None,
            specific_ranks: Some(ranks.into_iter().collect()),
            reward,
        }
    }

    /// Number of ranks this tier pays; 0 while the tier is incomplete.
    pub fn recipient_count(&self) -> u64 {
        match self.kind {
            TierKind::Range => match (self.start_rank, self.end_rank) {
                (Some(start), Some(end)) if end >= start => u64::from(end - start) + 1,
                _ => 0,
            },
            TierKind::Specific => self
                .specific_ranks
                .as_ref()
                .map(|ranks| ranks.len() as u64)
                .unwrap_or(0),
        }
    }

    /// Whether this tier pays the given rank
    pub fn covers(&self, rank: Rank) -> bool {
        match self.kind {
            TierKind::Range => match (self.start_rank, self.end_rank) {
                (Some(start), Some(end)) => start <= rank && rank <= end,
                _ => false,
            },
            TierKind::Specific => self
                .specific_ranks
                .as_ref()
                .is_some_and(|ranks| ranks.contains(&rank)),
        }
    }
}

/// Operator-defined unlockable milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-text unlock condition shown to players
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub reward: Coins,
}

impl Achievement {
    /// Blank achievement as created by the dashboard's "add" action
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            condition: String::new(),
            reward: DEFAULT_ACHIEVEMENT_REWARD,
        }
    }

    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        condition: impl Into<String>,
        reward: Coins,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            condition: condition.into(),
            reward,
        }
    }
}

/// Complete reward configuration edited on the developer dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    #[serde(default)]
    pub schedule: RankRewardSchedule,
    #[serde(default)]
    pub custom_tiers: Vec<CustomRewardTier>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            schedule: RankRewardSchedule::default(),
            custom_tiers: Vec::new(),
            achievements: vec![
                Achievement::new("1", "First Play", "Played the game for the first time", "Start a first game", 100),
                Achievement::new("2", "Score Master", "Reached 10000 points or more", "Score 10000 or more", 200),
            ],
        }
    }
}

impl RewardConfig {
    /// Empty configuration: zero schedule, no tiers, no achievements
    pub fn empty() -> Self {
        Self {
            schedule: RankRewardSchedule::zero(),
            custom_tiers: Vec::new(),
            achievements: Vec::new(),
        }
    }

    /// Whether another custom tier may be added
    pub fn can_add_custom_tier(&self) -> bool {
        self.custom_tiers.len() < MAX_CUSTOM_TIERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_custom_tier_defaults() {
        let tier = CustomRewardTier::new("t");
        assert_eq!(tier.kind, TierKind::Range);
        assert_eq!(tier.start_rank, Some(501));
        assert_eq!(tier.end_rank, Some(1000));
        assert_eq!(tier.reward, 10);
        assert_eq!(tier.recipient_count(), 500);
    }

    #[test]
    fn test_incomplete_range_has_no_recipients() {
        let mut tier = CustomRewardTier::new("t");
        tier.end_rank = None;
        assert_eq!(tier.recipient_count(), 0);
        assert!(!tier.covers(600));

        let inverted = CustomRewardTier::range("t", 900, 800, 5);
        assert_eq!(inverted.recipient_count(), 0);
    }

    #[test]
    fn test_specific_tier_coverage() {
        let tier = CustomRewardTier::specific("s", [5, 10, 15], 20);
        assert_eq!(tier.recipient_count(), 3);
        assert!(tier.covers(10));
        assert!(!tier.covers(11));
    }

    #[test]
    fn test_switching_kind_keeps_range_bounds() {
        let mut tier = CustomRewardTier::new("t");
        tier.kind = TierKind::Specific;
        assert_eq!(tier.recipient_count(), 0);
        tier.kind = TierKind::Range;
        assert_eq!(tier.recipient_count(), 500);
    }

    #[test]
    fn test_blank_achievement() {
        let achievement = Achievement::blank("a");
        assert!(achievement.name.is_empty());
        assert_eq!(achievement.reward, 100);
    }
}
