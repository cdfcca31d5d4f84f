//! # Leaderboard
//!
//! Users ranked by total donations raised.
//!
//! The position in the ranked output is the authoritative rank. The
//! `rank` stored on a [`User`] is carried along as `stored_rank` and any
//! disagreement is flagged on the entry rather than corrected.

use crate::types::Amount;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A user at its computed leaderboard position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position in the ranked ordering.
    pub rank: u32,
    /// Rank recorded on the user record (advisory).
    pub stored_rank: u32,
    /// Set when `stored_rank` disagrees with `rank`.
    pub rank_diverged: bool,
    pub user: User,
}

/// Totals across all ranked users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub participants: usize,
    pub total_raised: Amount,
    pub total_referrals: u64,
}

/// Rank users by donations descending, ties broken by ascending id.
#[must_use]
pub fn rank_leaderboard(users: &[User]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&User> = users.iter().collect();
    ordered.sort_by_key(|u| (Reverse(u.donations_raised), u.id));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(user, rank)| LeaderboardEntry {
            rank,
            stored_rank: user.rank,
            rank_diverged: user.rank != rank,
            user: user.clone(),
        })
        .collect()
}

/// Participant count and saturating totals of donations and referrals.
#[must_use]
pub fn summarize_leaderboard(users: &[User]) -> LeaderboardSummary {
    users
        .iter()
        .fold(LeaderboardSummary::default(), |mut acc, user| {
            acc.participants += 1;
            acc.total_raised = acc.total_raised.saturating_add(user.donations_raised);
            acc.total_referrals = acc
                .total_referrals
                .saturating_add(u64::from(user.total_referrals));
            acc
        })
}

/// Entries whose stored rank disagrees with the computed one.
pub fn diverged(entries: &[LeaderboardEntry]) -> impl Iterator<Item = &LeaderboardEntry> {
    entries.iter().filter(|e| e.rank_diverged)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::sample;
    use crate::UserId;

    fn ranked_fixture() -> Vec<User> {
        [15750, 12400, 9800, 8200, 6500]
            .into_iter()
            .zip(1..)
            .map(|(donations, id)| {
                let mut user = sample(id, donations);
                user.rank = id as u32;
                user
            })
            .collect()
    }

    #[test]
    fn fixture_order_is_unchanged() {
        let entries = rank_leaderboard(&ranked_fixture());
        let ids: Vec<u64> = entries.iter().map(|e| e.user.id.0).collect();
        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(diverged(&entries).count(), 0);
    }

    #[test]
    fn sorts_descending_regardless_of_input_order() {
        let mut users = ranked_fixture();
        users.reverse();
        let entries = rank_leaderboard(&users);
        assert_eq!(entries[0].user.id, UserId(1));
        assert_eq!(entries[4].user.id, UserId(5));
    }

    #[test]
    fn ties_break_on_ascending_id() {
        let users = vec![sample(9, 500), sample(2, 500), sample(5, 800)];
        let entries = rank_leaderboard(&users);
        let ids: Vec<u64> = entries.iter().map(|e| e.user.id.0).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn stale_stored_rank_is_flagged() {
        let mut users = ranked_fixture();
        // User 5 overtakes everyone without its stored rank being updated.
        users[4].donations_raised = 20000;

        let entries = rank_leaderboard(&users);
        assert_eq!(entries[0].user.id, UserId(5));
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].stored_rank, 5);
        assert!(entries[0].rank_diverged);
        assert_eq!(diverged(&entries).count(), 5);
    }

    #[test]
    fn empty_input() {
        assert!(rank_leaderboard(&[]).is_empty());
        assert_eq!(summarize_leaderboard(&[]), LeaderboardSummary::default());
    }

    #[test]
    fn summary_totals() {
        let mut users = ranked_fixture();
        users[0].total_referrals = 47;
        users[1].total_referrals = 38;
        let summary = summarize_leaderboard(&users);

        assert_eq!(summary.participants, 5);
        assert_eq!(summary.total_raised, 52650);
        assert_eq!(summary.total_referrals, 85);
    }
}
