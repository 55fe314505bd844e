//! Developer dashboard session
//!
//! Owns the single mutable reward configuration a developer is editing and
//! recomputes every total from it on demand. Nothing is cached: the budget is
//! evaluated fresh on each call, so a save always sees the latest edit.

use crate::achievement::compute_achievement_total;
use crate::budget::{BudgetPolicy, BudgetState};
use crate::config::DashboardConfig;
use crate::errors::{EconomyError, Result};
use crate::params::MAX_CUSTOM_TIERS;
use crate::types::{
    Achievement, Coins, CustomRewardTier, Rank, RankRewardSchedule, RewardConfig, TierKind,
};
use crate::weekly::compute_weekly_total;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Fixed-tier field of a [`RankRewardSchedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankField {
    First,
    Second,
    Third,
    Top100,
    Basic,
}

/// Single-field edit of a custom tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomTierEdit {
    Kind(TierKind),
    StartRank(Option<Rank>),
    EndRank(Option<Rank>),
    SpecificRanks(BTreeSet<Rank>),
    Reward(Coins),
}

/// Single-field edit of an achievement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementEdit {
    Name(String),
    Description(String),
    Condition(String),
    Reward(Coins),
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    developer_id: String,
    config: RewardConfig,
    available_balance: Coins,
    next_id: u64,
    last_saved: Option<RewardConfig>,
}

impl DashboardSession {
    /// Session over the portal's initial reward configuration
    pub fn new(developer_id: impl Into<String>, available_balance: Coins) -> Self {
        Self::with_config(developer_id, RewardConfig::default(), available_balance)
    }

    /// Session over an existing configuration. The configuration is taken
    /// as is: a caller holding more than [`MAX_CUSTOM_TIERS`] tiers keeps
    /// them, and only [`add_custom_tier`](Self::add_custom_tier) enforces the
    /// limit. Run [`DashboardConfig::validate`] first to reject such input.
    pub fn with_config(
        developer_id: impl Into<String>,
        config: RewardConfig,
        available_balance: Coins,
    ) -> Self {
        Self {
            developer_id: developer_id.into(),
            config,
            available_balance,
            next_id: 1,
            last_saved: None,
        }
    }

    pub fn from_config(developer_id: impl Into<String>, config: &DashboardConfig) -> Self {
        Self::with_config(developer_id, config.rewards(), config.available_balance)
    }

    pub fn developer_id(&self) -> &str {
        &self.developer_id
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    pub fn available_balance(&self) -> Coins {
        self.available_balance
    }

    pub fn set_available_balance(&mut self, balance: Coins) {
        self.available_balance = balance;
    }

    /// Configuration accepted by the most recent successful save
    pub fn last_saved(&self) -> Option<&RewardConfig> {
        self.last_saved.as_ref()
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{prefix}-{}", self.next_id);
            self.next_id += 1;
            let taken = self.config.custom_tiers.iter().any(|t| t.id == id)
                || self.config.achievements.iter().any(|a| a.id == id);
            if !taken {
                return id;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Fixed tiers
    // -------------------------------------------------------------------------

    pub fn set_schedule_field(&mut self, field: RankField, value: Coins) {
        let schedule = &mut self.config.schedule;
        match field {
            RankField::First => schedule.first = value,
            RankField::Second => schedule.second = value,
            RankField::Third => schedule.third = value,
            RankField::Top100 => schedule.top100 = value,
            RankField::Basic => schedule.basic = value,
        }
    }

    pub fn set_schedule(&mut self, schedule: RankRewardSchedule) {
        self.config.schedule = schedule;
    }

    // -------------------------------------------------------------------------
    // Custom tiers
    // -------------------------------------------------------------------------

    /// Add a placeholder tier. Rejected without any change once
    /// [`MAX_CUSTOM_TIERS`] tiers exist.
    pub fn add_custom_tier(&mut self) -> Result<&CustomRewardTier> {
        if !self.config.can_add_custom_tier() {
            debug!(
                target: "economy",
                developer = %self.developer_id,
                "custom tier limit reached, add ignored"
            );
            return Err(EconomyError::CustomTierLimit {
                max: MAX_CUSTOM_TIERS,
            });
        }
        let id = self.fresh_id("tier");
        self.config.custom_tiers.push(CustomRewardTier::new(id));
        let index = self.config.custom_tiers.len() - 1;
        Ok(&self.config.custom_tiers[index])
    }

    pub fn update_custom_tier(&mut self, id: &str, edit: CustomTierEdit) -> Result<()> {
        let tier = self
            .config
            .custom_tiers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| EconomyError::UnknownCustomTier(id.to_string()))?;

        match edit {
            CustomTierEdit::Kind(kind) => tier.kind = kind,
            CustomTierEdit::StartRank(rank) => tier.start_rank = rank,
            CustomTierEdit::EndRank(rank) => tier.end_rank = rank,
            CustomTierEdit::SpecificRanks(ranks) => tier.specific_ranks = Some(ranks),
            CustomTierEdit::Reward(reward) => tier.reward = reward,
        }
        Ok(())
    }

    pub fn remove_custom_tier(&mut self, id: &str) -> Result<CustomRewardTier> {
        let index = self
            .config
            .custom_tiers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| EconomyError::UnknownCustomTier(id.to_string()))?;
        Ok(self.config.custom_tiers.remove(index))
    }

    // -------------------------------------------------------------------------
    // Achievements
    // -------------------------------------------------------------------------

    pub fn add_achievement(&mut self) -> &Achievement {
        let id = self.fresh_id("achievement");
        self.config.achievements.push(Achievement::blank(id));
        let index = self.config.achievements.len() - 1;
        &self.config.achievements[index]
    }

    pub fn update_achievement(&mut self, id: &str, edit: AchievementEdit) -> Result<()> {
        let achievement = self
            .config
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| EconomyError::UnknownAchievement(id.to_string()))?;

        match edit {
            AchievementEdit::Name(name) => achievement.name = name,
            AchievementEdit::Description(description) => achievement.description = description,
            AchievementEdit::Condition(condition) => achievement.condition = condition,
            AchievementEdit::Reward(reward) => achievement.reward = reward,
        }
        Ok(())
    }

    pub fn remove_achievement(&mut self, id: &str) -> Result<Achievement> {
        let index = self
            .config
            .achievements
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| EconomyError::UnknownAchievement(id.to_string()))?;
        Ok(self.config.achievements.remove(index))
    }

    // -------------------------------------------------------------------------
    // Totals and saving
    // -------------------------------------------------------------------------

    pub fn weekly_total(&self) -> Coins {
        compute_weekly_total(&self.config.schedule, &self.config.custom_tiers)
    }

    pub fn achievement_total(&self) -> Decimal {
        compute_achievement_total(&self.config.achievements)
    }

    pub fn budget(&self) -> BudgetState {
        BudgetPolicy::evaluate(
            self.weekly_total(),
            self.achievement_total(),
            self.available_balance,
        )
    }

    /// Commit the current configuration. Fails with
    /// [`EconomyError::OverBudget`] and leaves the session untouched when the
    /// configuration costs more than the available balance.
    pub fn save_rewards(&mut self) -> Result<RewardConfig> {
        let budget = self.budget();
        budget.ensure_within_budget()?;

        let snapshot = self.config.clone();
        info!(
            target: "economy",
            developer = %self.developer_id,
            total = %budget.total_liability,
            schedule = ?snapshot.schedule,
            "reward configuration saved"
        );
        self.last_saved = Some(snapshot.clone());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_session_is_over_budget() {
        let session = DashboardSession::new("dev", 15_000);
        let budget = session.budget();
        assert_eq!(budget.weekly_liability, 31_450);
        assert_eq!(budget.achievement_liability, Decimal::from(33_000));
        assert!(budget.is_over_budget);
        assert_eq!(budget.deficit, Decimal::from(49_450));
    }

    #[test]
    fn test_oversized_config_kept_but_cannot_grow() {
        let mut config = RewardConfig::empty();
        for id in ["a", "b", "c"] {
            config.custom_tiers.push(CustomRewardTier::range(id, 501, 510, 1));
        }
        let mut session = DashboardSession::with_config("dev", config, 0);
        assert_eq!(session.config().custom_tiers.len(), 3);
        assert_eq!(session.weekly_total(), 30);
        assert!(matches!(
            session.add_custom_tier(),
            Err(EconomyError::CustomTierLimit { max: 2 })
        ));
        assert_eq!(session.config().custom_tiers.len(), 3);
    }

    #[test]
    fn test_fresh_ids_skip_existing() {
        let mut config = RewardConfig::empty();
        config.achievements.push(Achievement::blank("achievement-1"));
        let mut session = DashboardSession::with_config("dev", config, 0);
        let id = session.add_achievement().id.clone();
        assert_eq!(id, "achievement-2");
    }

    #[test]
    fn test_schedule_field_edit() {
        let mut session = DashboardSession::with_config("dev", RewardConfig::empty(), 0);
        session.set_schedule_field(RankField::Basic, 2);
        assert_eq!(session.weekly_total(), 800);
    }
}
