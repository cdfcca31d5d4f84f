//! # Fundraising Service
//!
//! Composes a [`DataProvider`] with the pure metric functions.
//!
//! Lookups return `Option`: deciding what a missing user means (404, a
//! CLI error) belongs to the caller.

use crate::error::{CoreError, Result};
use crate::leaderboard::{rank_leaderboard, summarize_leaderboard, LeaderboardEntry, LeaderboardSummary};
use crate::progress::{compute_progress, ProgressResult};
use crate::provider::DataProvider;
use crate::reward::{compute_unlocked_rewards, summarize_rewards, RewardSummary, UnlockedReward};
use crate::stats::{donation_stats, DonationStats};
use crate::types::{Amount, TierId, UserId};
use crate::user::User;

/// Read-only facade over a data provider.
#[derive(Debug, Clone)]
pub struct FundraisingService<P> {
    provider: P,
    monthly_goal: Amount,
}

impl<P: DataProvider> FundraisingService<P> {
    /// Create a service. The monthly goal must be positive.
    pub fn new(provider: P, monthly_goal: Amount) -> Result<Self> {
        if monthly_goal == 0 {
            return Err(CoreError::InvalidGoal);
        }
        Ok(Self {
            provider,
            monthly_goal,
        })
    }

    /// The configured monthly goal.
    pub fn monthly_goal(&self) -> Amount {
        self.monthly_goal
    }

    /// Lookup a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.provider.get_user(id)
    }

    /// Mock login: resolve a user by email.
    pub fn login(&self, email: &str) -> Option<&User> {
        self.provider.find_user_by_email(email)
    }

    /// All users ranked by donations.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        rank_leaderboard(self.provider.list_users())
    }

    pub fn leaderboard_summary(&self) -> LeaderboardSummary {
        summarize_leaderboard(self.provider.list_users())
    }

    /// Reward tiers annotated with the user's unlock status.
    pub fn rewards(&self, id: UserId) -> Option<Vec<UnlockedReward>> {
        let user = self.provider.get_user(id)?;
        Some(compute_unlocked_rewards(
            user,
            self.provider.reward_catalog().tiers(),
        ))
    }

    pub fn reward_summary(&self, id: UserId) -> Option<RewardSummary> {
        let user = self.provider.get_user(id)?;
        Some(summarize_rewards(
            user,
            self.provider.reward_catalog().tiers(),
        ))
    }

    /// Progress of a user towards a specific tier.
    pub fn tier_progress(&self, id: UserId, tier: TierId) -> Option<ProgressResult> {
        let user = self.provider.get_user(id)?;
        let tier = self.provider.reward_catalog().get(tier)?;
        Some(compute_progress(user, tier))
    }

    /// Dashboard statistics against the configured monthly goal.
    pub fn stats(&self, id: UserId) -> Option<DonationStats> {
        let user = self.provider.get_user(id)?;
        Some(donation_stats(
            user,
            self.monthly_goal,
            self.provider.monthly_history(id),
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
