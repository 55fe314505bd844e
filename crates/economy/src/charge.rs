//! MPcoin charges: real-currency purchases converted at a fixed rate plus bonus.
//!
//! Conversion is `ceil(won / 10 × (1 + bonus% / 100))`. Intermediates are kept
//! in [`Decimal`] so nothing is rounded before the final ceiling, and the
//! ceiling guarantees a purchaser is never under-credited.

use crate::params::WON_PER_COIN;
use crate::types::{Coins, Won};
use chrono::{Duration, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed real-currency price point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChargeOption {
    pub amount_won: Won,
    pub bonus_percent: u32,
}

/// Price points offered on the charge screen
pub const CHARGE_CATALOG: &[ChargeOption] = &[
    ChargeOption { amount_won: 1_000, bonus_percent: 3 },
    ChargeOption { amount_won: 3_000, bonus_percent: 4 },
    ChargeOption { amount_won: 10_000, bonus_percent: 5 },
    ChargeOption { amount_won: 50_000, bonus_percent: 6 },
    ChargeOption { amount_won: 100_000, bonus_percent: 7 },
    ChargeOption { amount_won: 5_990, bonus_percent: 0 },
];

/// Look up a catalog entry by price
pub fn find_charge_option(amount_won: Won) -> Option<ChargeOption> {
    CHARGE_CATALOG
        .iter()
        .copied()
        .find(|option| option.amount_won == amount_won)
}

fn base_coins(amount_won: Won) -> Decimal {
    Decimal::from(amount_won) / Decimal::from(WON_PER_COIN)
}

/// MPcoin credited for a charge, rounded up
pub fn compute_credited_coins(amount_won: Won, bonus_percent: u32) -> Coins {
    let base = base_coins(amount_won);
    let bonus = base * Decimal::from(bonus_percent) / Decimal::ONE_HUNDRED;
    // u64 won / 10 with a u32 percent stays far inside i64.
    (base + bonus).ceil().to_i64().unwrap_or(Coins::MAX)
}

impl ChargeOption {
    pub fn credited_coins(&self) -> Coins {
        compute_credited_coins(self.amount_won, self.bonus_percent)
    }

    /// Coins credited on top of the plain conversion
    pub fn bonus_coins(&self) -> Coins {
        let plain = base_coins(self.amount_won).ceil().to_i64().unwrap_or(Coins::MAX);
        self.credited_coins().saturating_sub(plain)
    }
}

// =============================================================================
// CHARGE HISTORY
// =============================================================================

/// Completed charge as listed in a player's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRecord {
    pub id: String,
    pub date: NaiveDateTime,
    pub amount_won: Won,
    pub coins: Coins,
    pub bonus_percent: u32,
    /// Payment method label, e.g. "Credit card"
    pub method: String,
    pub status: String,
}

/// Look-back window for the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPeriod {
    #[default]
    All,
    Week,
    Month,
    ThreeMonths,
}

impl HistoryPeriod {
    pub fn window(&self) -> Option<Duration> {
        match self {
            HistoryPeriod::All => None,
            HistoryPeriod::Week => Some(Duration::days(7)),
            HistoryPeriod::Month => Some(Duration::days(30)),
            HistoryPeriod::ThreeMonths => Some(Duration::days(90)),
        }
    }
}

impl ChargeRecord {
    /// Case-insensitive match on the method, or a substring of the won/coin amounts
    pub fn matches_search(&self, term: &str) -> bool {
        self.method.to_lowercase().contains(&term.to_lowercase())
            || self.amount_won.to_string().contains(term)
            || self.coins.to_string().contains(term)
    }

    pub fn within_period(&self, period: HistoryPeriod, now: NaiveDateTime) -> bool {
        match period.window() {
            None => true,
            Some(window) => now - self.date <= window,
        }
    }
}

/// Records matching both the search term and the period, in their original order
pub fn filter_charge_history<'a>(
    records: &'a [ChargeRecord],
    search: &str,
    period: HistoryPeriod,
    now: NaiveDateTime,
) -> Vec<&'a ChargeRecord> {
    records
        .iter()
        .filter(|record| record.matches_search(search) && record.within_period(period, now))
        .collect()
}
