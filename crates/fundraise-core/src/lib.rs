//! # Fundraise Core
//!
//! Pure metrics engine for the fundraising portal.
//!
//! Given a fundraiser and the reward catalog this crate derives:
//! - unlock status per reward tier
//! - progress towards the next tier and towards a monthly goal
//! - leaderboard ordering by donations raised
//!
//! Everything here is synchronous, side-effect free and integer-only.
//! Serving the results over HTTP is the job of `apps/fundraise`.

pub mod error;
pub mod leaderboard;
pub mod progress;
pub mod provider;
pub mod reward;
pub mod service;
pub mod stats;
pub mod types;
pub mod user;

pub use error::{CoreError, Result};
pub use leaderboard::{rank_leaderboard, summarize_leaderboard, LeaderboardEntry, LeaderboardSummary};
pub use progress::{compute_progress, monthly_progress, ProgressResult};
pub use provider::{DataProvider, InMemoryProvider};
pub use reward::{
    compute_unlocked_rewards, next_locked_goal, summarize_rewards, NextGoal, RewardCatalog,
    RewardSummary, RewardTier, UnlockedReward,
};
pub use service::FundraisingService;
pub use stats::{donation_stats, DonationStats, MonthlyDonation};
pub use types::{Amount, Percent, TierId, UserId};
pub use user::User;
