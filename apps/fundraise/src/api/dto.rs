//! Request and response bodies.
//!
//! Core records are serialized as-is; the wrappers here only add
//! presentation fields such as whole-number percentages.

use fundraise_core::{DonationStats, ProgressResult, RewardSummary, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

/// Progress with percentages rounded for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    #[serde(flatten)]
    pub progress: ProgressResult,
    pub percent_rounded: u64,
    pub percent_clamped_rounded: u64,
}

impl From<ProgressResult> for ProgressView {
    fn from(progress: ProgressResult) -> Self {
        Self {
            percent_rounded: progress.percent.rounded(),
            percent_clamped_rounded: progress.percent_clamped.rounded(),
            progress,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: DonationStats,
    pub percent_rounded: u64,
    pub goal_met: bool,
    pub exceeded_goal: bool,
}

impl From<DonationStats> for StatsResponse {
    fn from(stats: DonationStats) -> Self {
        Self {
            percent_rounded: stats.progress.percent.rounded(),
            goal_met: stats.progress.reached,
            exceeded_goal: stats.progress.exceeded(),
            stats,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummaryResponse {
    #[serde(flatten)]
    pub summary: RewardSummary,
    pub next_goal_percent_rounded: Option<u64>,
}

impl From<RewardSummary> for RewardSummaryResponse {
    fn from(summary: RewardSummary) -> Self {
        Self {
            next_goal_percent_rounded: summary
                .next_goal
                .as_ref()
                .map(|next| next.progress.percent.rounded()),
            summary,
        }
    }
}
