//! # Reward Tiers
//!
//! The reward catalog and per-user unlock status.
//!
//! A tier is unlocked once a user's total donations meet or exceed its
//! threshold. Unlock status is never stored; it is derived on each read.

use crate::error::{CoreError, Result};
use crate::progress::{compute_progress, ProgressResult};
use crate::types::{Amount, TierId};
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// REWARD TIER
// =============================================================================

/// A fundraising milestone with its badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTier {
    pub id: TierId,
    pub title: String,
    pub description: String,
    pub threshold: Amount,
    pub icon: String,
}

impl RewardTier {
    /// Create a new tier. Validation happens in [`RewardCatalog::new`].
    #[must_use]
    pub fn new(
        id: TierId,
        title: impl Into<String>,
        description: impl Into<String>,
        threshold: Amount,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            threshold,
            icon: icon.into(),
        }
    }

    /// Check whether `user` has unlocked this tier.
    #[must_use]
    pub fn is_unlocked_by(&self, user: &User) -> bool {
        user.donations_raised >= self.threshold
    }
}

// =============================================================================
// REWARD CATALOG
// =============================================================================

/// A validated, immutable list of reward tiers.
///
/// Insertion order is preserved. Every tier has a positive threshold and
/// a unique id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RewardTier>", into = "Vec<RewardTier>")]
pub struct RewardCatalog {
    tiers: Vec<RewardTier>,
}

impl RewardCatalog {
    /// Build a catalog, rejecting zero thresholds and duplicate ids.
    pub fn new(tiers: Vec<RewardTier>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for tier in &tiers {
            if tier.threshold == 0 {
                return Err(CoreError::InvalidTier {
                    id: tier.id,
                    threshold: tier.threshold,
                });
            }
            if !seen.insert(tier.id) {
                return Err(CoreError::DuplicateTier(tier.id));
            }
        }
        Ok(Self { tiers })
    }

    /// All tiers in catalog order.
    #[must_use]
    pub fn tiers(&self) -> &[RewardTier] {
        &self.tiers
    }

    /// Lookup a tier by id.
    #[must_use]
    pub fn get(&self, id: TierId) -> Option<&RewardTier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    /// Number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Check if the catalog has no tiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl TryFrom<Vec<RewardTier>> for RewardCatalog {
    type Error = CoreError;

    fn try_from(tiers: Vec<RewardTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<RewardCatalog> for Vec<RewardTier> {
    fn from(catalog: RewardCatalog) -> Self {
        catalog.tiers
    }
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

/// A tier annotated with the user's unlock status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedReward {
    #[serde(flatten)]
    pub tier: RewardTier,
    pub unlocked: bool,
}

/// The next tier to aim for and how far away it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextGoal {
    pub tier: RewardTier,
    pub progress: ProgressResult,
}

/// Aggregate reward standing of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummary {
    pub badges_earned: usize,
    pub goals_remaining: usize,
    pub total_raised: Amount,
    pub next_goal: Option<NextGoal>,
}

/// Annotate every tier with whether `user` has unlocked it.
///
/// Output order matches `tiers`.
#[must_use]
pub fn compute_unlocked_rewards(user: &User, tiers: &[RewardTier]) -> Vec<UnlockedReward> {
    tiers
        .iter()
        .map(|tier| UnlockedReward {
            unlocked: tier.is_unlocked_by(user),
            tier: tier.clone(),
        })
        .collect()
}

/// The locked tier with the smallest threshold, ties broken by smallest id.
///
/// Returns `None` once every tier is unlocked.
#[must_use]
pub fn next_locked_goal<'a>(user: &User, tiers: &'a [RewardTier]) -> Option<&'a RewardTier> {
    tiers
        .iter()
        .filter(|tier| !tier.is_unlocked_by(user))
        .min_by_key(|tier| (tier.threshold, tier.id))
}

/// Summarize unlocked and remaining tiers plus the next goal.
#[must_use]
pub fn summarize_rewards(user: &User, tiers: &[RewardTier]) -> RewardSummary {
    let badges_earned = tiers.iter().filter(|t| t.is_unlocked_by(user)).count();
    let next_goal = next_locked_goal(user, tiers).map(|tier| NextGoal {
        progress: compute_progress(user, tier),
        tier: tier.clone(),
    });

    RewardSummary {
        badges_earned,
        goals_remaining: tiers.len() - badges_earned,
        total_raised: user.donations_raised,
        next_goal,
    }
}

// =============================================================================
// TESTS
// =============================================================================
