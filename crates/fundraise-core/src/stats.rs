//! # Dashboard Statistics
//!
//! Per-user donation figures shown on the dashboard.

use crate::progress::{monthly_progress, ProgressResult};
use crate::types::Amount;
use crate::user::User;
use serde::{Deserialize, Serialize};

/// Donations collected in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDonation {
    pub month: String,
    pub amount: Amount,
}

impl MonthlyDonation {
    #[must_use]
    pub fn new(month: impl Into<String>, amount: Amount) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}

/// Dashboard figures for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub total_raised: Amount,
    pub monthly_goal: Amount,
    pub total_referrals: u32,
    pub monthly_data: Vec<MonthlyDonation>,
    pub progress: ProgressResult,
}

/// Assemble dashboard statistics for `user`.
#[must_use]
pub fn donation_stats(
    user: &User,
    monthly_goal: Amount,
    history: &[MonthlyDonation],
) -> DonationStats {
    DonationStats {
        total_raised: user.donations_raised,
        monthly_goal,
        total_referrals: user.total_referrals,
        monthly_data: history.to_vec(),
        progress: monthly_progress(user, monthly_goal),
    }
}
