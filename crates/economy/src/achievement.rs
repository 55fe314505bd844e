//! Achievement payout liability
//!
//! Every achievement is budgeted as claimed by [`EXPECTED_CLAIMANTS`] users,
//! plus an [`ACHIEVEMENT_OVERHEAD_PERCENT`] surcharge. The result can be
//! fractional and is left unrounded; presentation layers round for display.

use crate::params::{ACHIEVEMENT_OVERHEAD_PERCENT, EXPECTED_CLAIMANTS};
use crate::types::{Achievement, Coins};
use rust_decimal::Decimal;
use tracing::debug;

/// `Σ reward × EXPECTED_CLAIMANTS`, before overhead
pub fn achievement_base_total(achievements: &[Achievement]) -> Coins {
    achievements
        .iter()
        .map(|a| a.reward.saturating_mul(EXPECTED_CLAIMANTS))
        .fold(0 as Coins, Coins::saturating_add)
}

/// Base total plus overhead
pub fn compute_achievement_total(achievements: &[Achievement]) -> Decimal {
    let base = Decimal::from(achievement_base_total(achievements));
    let overhead = base * Decimal::from(ACHIEVEMENT_OVERHEAD_PERCENT) / Decimal::ONE_HUNDRED;
    let total = base + overhead;

    debug!(
        target: "economy",
        count = achievements.len(),
        %base,
        %total,
        "achievement reward liability computed"
    );

    total
}
