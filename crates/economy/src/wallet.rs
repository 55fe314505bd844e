//! Player wallet
//!
//! In-memory MPcoin balance with its transaction history and the portal's
//! earn/spend rules: first plays pay, replays cost, uploads and daily logins
//! pay, and charges credit the converted amount. Dates are supplied by the
//! caller so the wallet never reads a clock.

use crate::charge::{ChargeOption, ChargeRecord};
use crate::errors::{EconomyError, Result};
use crate::params::{DEFAULT_PLAYER_BALANCE, FIRST_PLAY_REWARD, GAME_UPLOAD_BONUS, REPLAY_COST};
use crate::streak::{check_in, KeyValueStore, LoginOutcome};
use crate::types::{Coins, GameId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earn,
    Spend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub kind: TransactionKind,
    /// Always non-negative; `kind` carries the direction
    pub amount: Coins,
    pub description: String,
    pub date: NaiveDate,
}

/// What starting a game did to the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    FirstPlay { reward: Coins },
    Replay { cost: Coins },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    balance: Coins,
    transactions: Vec<Transaction>,
    charge_history: Vec<ChargeRecord>,
    played_games: HashSet<GameId>,
    next_id: u64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_BALANCE)
    }
}

impl Wallet {
    pub fn new(balance: Coins) -> Self {
        Self {
            balance,
            transactions: Vec::new(),
            charge_history: Vec::new(),
            played_games: HashSet::new(),
            next_id: 1,
        }
    }

    pub fn balance(&self) -> Coins {
        self.balance
    }

    /// Most recent last
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn charge_history(&self) -> &[ChargeRecord] {
        &self.charge_history
    }

    pub fn has_played(&self, game_id: GameId) -> bool {
        self.played_games.contains(&game_id)
    }

    pub fn can_afford_replay(&self) -> bool {
        self.balance >= REPLAY_COST
    }

    fn record(&mut self, kind: TransactionKind, amount: Coins, description: &str, date: NaiveDate) {
        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(Transaction {
            id,
            kind,
            amount,
            description: description.to_string(),
            date,
        });
    }

    fn deposit(&mut self, amount: Coins, description: &str, date: NaiveDate) -> Coins {
        self.balance = self.balance.saturating_add(amount);
        self.record(TransactionKind::Earn, amount, description, date);
        debug!(target: "economy", amount, balance = self.balance, description, "wallet credited");
        self.balance
    }

    /// Add coins; returns the new balance. Negative amounts are rejected.
    pub fn credit(&mut self, amount: Coins, description: &str, date: NaiveDate) -> Result<Coins> {
        if amount < 0 {
            return Err(EconomyError::NegativeAmount(amount));
        }
        Ok(self.deposit(amount, description, date))
    }

    /// Remove coins; fails without any change on a negative amount or when
    /// the balance is short
    pub fn debit(&mut self, amount: Coins, description: &str, date: NaiveDate) -> Result<Coins> {
        if amount < 0 {
            return Err(EconomyError::NegativeAmount(amount));
        }
        if self.balance < amount {
            return Err(EconomyError::InsufficientCoins {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.record(TransactionKind::Spend, amount, description, date);
        debug!(target: "economy", amount, balance = self.balance, description, "wallet debited");
        Ok(self.balance)
    }

    /// Start a game: the first play of a game pays, every later play costs.
    pub fn play_game(&mut self, game_id: GameId, date: NaiveDate) -> Result<PlayOutcome> {
        if self.played_games.insert(game_id) {
            self.deposit(FIRST_PLAY_REWARD, "First play reward", date);
            return Ok(PlayOutcome::FirstPlay {
                reward: FIRST_PLAY_REWARD,
            });
        }
        self.debit(REPLAY_COST, "Replay", date)?;
        Ok(PlayOutcome::Replay { cost: REPLAY_COST })
    }

    /// Bonus paid to a developer for uploading a new game
    pub fn record_game_upload(&mut self, date: NaiveDate) -> Coins {
        info!(target: "economy", bonus = GAME_UPLOAD_BONUS, "game upload bonus granted");
        self.deposit(GAME_UPLOAD_BONUS, "Game upload bonus", date)
    }

    /// Credit a completed charge and keep it in the charge history
    pub fn charge(
        &mut self,
        option: ChargeOption,
        method: &str,
        at: NaiveDateTime,
    ) -> ChargeRecord {
        let coins = option.credited_coins();
        let description = format!("Charge {} won", option.amount_won);
        self.deposit(coins, &description, at.date());

        let record = ChargeRecord {
            id: (self.charge_history.len() + 1).to_string(),
            date: at,
            amount_won: option.amount_won,
            coins,
            bonus_percent: option.bonus_percent,
            method: method.to_string(),
            status: "completed".to_string(),
        };
        self.charge_history.push(record.clone());

        info!(
            target: "economy",
            won = option.amount_won,
            coins,
            method,
            "charge credited"
        );
        record
    }

    /// Run the daily check-in against `store` and credit any reward
    pub fn claim_login_reward(
        &mut self,
        store: &mut dyn KeyValueStore,
        today: NaiveDate,
    ) -> Result<LoginOutcome> {
        let outcome = check_in(store, today)?;
        if let Some(reward) = outcome.reward {
            let description = format!("Login reward (day {})", outcome.consecutive_days);
            self.deposit(reward, &description, today);
        }
        Ok(outcome)
    }
}
