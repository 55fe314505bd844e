//! Weekly ranking payout liability
//!
//! The fixed tiers assume a full leaderboard: 97 recipients for ranks 4-100
//! and 400 for ranks 101-500, regardless of how many players actually rank.
//! Custom tiers add `reward × recipients` each. All sums saturate.

use crate::params::{BASIC_RECIPIENTS, TOP100_RECIPIENTS};
use crate::types::{Coins, CustomRewardTier, RankRewardSchedule};
use tracing::debug;

/// Liability of the fixed 1st/2nd/3rd/top100/basic tiers
pub fn fixed_tier_total(schedule: &RankRewardSchedule) -> Coins {
    schedule
        .first
        .saturating_add(schedule.second)
        .saturating_add(schedule.third)
        .saturating_add(schedule.top100.saturating_mul(TOP100_RECIPIENTS))
        .saturating_add(schedule.basic.saturating_mul(BASIC_RECIPIENTS))
}

/// Liability of a single custom tier; 0 while its ranks are incomplete
pub fn tier_contribution(tier: &CustomRewardTier) -> Coins {
    let recipients = Coins::try_from(tier.recipient_count()).unwrap_or(Coins::MAX);
    tier.reward.saturating_mul(recipients)
}

/// Total weekly liability: fixed tiers plus every custom tier
pub fn compute_weekly_total(schedule: &RankRewardSchedule, custom_tiers: &[CustomRewardTier]) -> Coins {
    let fixed = fixed_tier_total(schedule);
    let custom = custom_tiers
        .iter()
        .map(tier_contribution)
        .fold(0 as Coins, Coins::saturating_add);

    debug!(
        target: "economy",
        fixed,
        custom,
        tiers = custom_tiers.len(),
        "weekly reward liability computed"
    );

    fixed.saturating_add(custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rank, TierKind};

    fn schedule() -> RankRewardSchedule {
        RankRewardSchedule {
            first: 1000,
            second: 500,
            third: 250,
            top100: 100,
            basic: 50,
        }
    }

    #[test]
    fn test_fixed_tiers_only() {
        assert_eq!(compute_weekly_total(&schedule(), &[]), 31_450);
    }

    #[test]
    fn test_range_tier_contribution() {
        let tier = CustomRewardTier::range("r", 501, 1000, 10);
        assert_eq!(tier_contribution(&tier), 5_000);
        assert_eq!(compute_weekly_total(&schedule(), &[tier]), 36_450);
    }

    #[test]
    fn test_specific_tier_contribution() {
        let tier = CustomRewardTier::specific("s", [5, 10, 15], 20);
        assert_eq!(tier_contribution(&tier), 60);
    }

    #[test]
    fn test_incomplete_tiers_contribute_nothing() {
        let mut missing_end = CustomRewardTier::new("a");
        missing_end.end_rank = None;
        let inverted = CustomRewardTier::range("b", 700, 600, 10);
        let mut unset_ranks = CustomRewardTier::specific("c", Vec::<Rank>::new(), 30);
        unset_ranks.specific_ranks = None;

        assert_eq!(tier_contribution(&missing_end), 0);
        assert_eq!(tier_contribution(&inverted), 0);
        assert_eq!(tier_contribution(&unset_ranks), 0);
        assert_eq!(tier_contribution(&CustomRewardTier::specific("d", Vec::<Rank>::new(), 30)), 0);
    }

    #[test]
    fn test_negative_reward_passes_through() {
        let tier = CustomRewardTier::range("n", 1, 10, -5);
        assert_eq!(tier_contribution(&tier), -50);
    }

    #[test]
    fn test_kind_decides_which_fields_count() {
        let mut tier = CustomRewardTier::range("k", 1, 4, 10);
        tier.specific_ranks = Some([1, 2].into_iter().collect());
        assert_eq!(tier_contribution(&tier), 40);
        tier.kind = TierKind::Specific;
        assert_eq!(tier_contribution(&tier), 20);
    }

    #[test]
    fn test_zero_schedule_is_zero() {
        assert_eq!(compute_weekly_total(&RankRewardSchedule::zero(), &[]), 0);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let huge = RankRewardSchedule {
            basic: Coins::MAX / 2,
            ..RankRewardSchedule::zero()
        };
        assert_eq!(fixed_tier_total(&huge), Coins::MAX);
    }
}
