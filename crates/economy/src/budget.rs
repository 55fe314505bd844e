//! Budget policy: configured reward liability against the operator's balance.

use crate::errors::{EconomyError, Result};
use crate::types::Coins;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Snapshot of a configuration's liability against the available balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    pub available_balance: Coins,
    pub weekly_liability: Coins,
    pub achievement_liability: Decimal,
    pub total_liability: Decimal,
    pub is_over_budget: bool,
    /// `max(0, total - available)`
    pub deficit: Decimal,
}

/// Stateless budget check. Re-evaluate on every edit; never cache a state
/// across configuration changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetPolicy;

impl BudgetPolicy {
    pub fn evaluate(
        weekly_liability: Coins,
        achievement_liability: Decimal,
        available_balance: Coins,
    ) -> BudgetState {
        let total_liability = Decimal::from(weekly_liability) + achievement_liability;
        let available = Decimal::from(available_balance);
        let is_over_budget = total_liability > available;
        let deficit = (total_liability - available).max(Decimal::ZERO);

        BudgetState {
            available_balance,
            weekly_liability,
            achievement_liability,
            total_liability,
            is_over_budget,
            deficit,
        }
    }
}

impl BudgetState {
    /// Balance left after paying every configured reward; negative when over budget
    pub fn remaining(&self) -> Decimal {
        Decimal::from(self.available_balance) - self.total_liability
    }

    /// Gate for save actions
    pub fn ensure_within_budget(&self) -> Result<()> {
        if self.is_over_budget {
            warn!(
                target: "economy",
                total = %self.total_liability,
                available = self.available_balance,
                deficit = %self.deficit,
                "reward configuration exceeds available MPcoin"
            );
            return Err(EconomyError::OverBudget {
                total: self.total_liability,
                available: self.available_balance,
                deficit: self.deficit,
            });
        }
        Ok(())
    }
}
