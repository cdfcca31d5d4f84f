//! # Progress Computation
//!
//! Progress of a fundraiser towards a reward tier or a monthly goal.
//!
//! Both the unclamped and the clamped percentage are kept: the clamped
//! value sizes a progress bar, the unclamped one backs "exceeded goal"
//! messaging.

use crate::reward::RewardTier;
use crate::types::{Amount, Percent};
use crate::user::User;
use serde::{Deserialize, Serialize};

/// Progress of an amount raised against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResult {
    /// Amount raised so far.
    pub raised: Amount,
    /// Target amount.
    pub target: Amount,
    /// Amount still missing, zero once the target is met.
    pub remaining: Amount,
    /// Unclamped percentage, may exceed 100%.
    pub percent: Percent,
    /// Percentage capped at 100%.
    pub percent_clamped: Percent,
    /// Whether the target has been met or exceeded.
    pub reached: bool,
}

impl ProgressResult {
    /// Compute progress of `raised` against `target`.
    ///
    /// A zero target counts as already reached.
    #[must_use]
    pub fn new(raised: Amount, target: Amount) -> Self {
        let percent = Percent::of(raised, target);
        Self {
            raised,
            target,
            remaining: target.saturating_sub(raised),
            percent,
            percent_clamped: percent.clamped(),
            reached: raised >= target,
        }
    }

    /// Check whether the target was strictly exceeded.
    #[must_use]
    pub fn exceeded(&self) -> bool {
        self.raised > self.target
    }
}

/// Progress of `user` towards unlocking `tier`.
#[must_use]
pub fn compute_progress(user: &User, tier: &RewardTier) -> ProgressResult {
    ProgressResult::new(user.donations_raised, tier.threshold)
}

/// Progress of `user` towards a caller-supplied monthly goal.
#[must_use]
pub fn monthly_progress(user: &User, monthly_goal: Amount) -> ProgressResult {
    ProgressResult::new(user.donations_raised, monthly_goal)
}

// =============================================================================
// TESTS
// =============================================================================
