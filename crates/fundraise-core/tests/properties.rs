//! Property tests for the fundraising metrics.

#![allow(clippy::unwrap_used, clippy::panic)]

use chrono::NaiveDate;
use fundraise_core::{
    compute_progress, compute_unlocked_rewards, monthly_progress, next_locked_goal,
    rank_leaderboard, RewardTier, TierId, User, UserId,
};
use proptest::prelude::*;

fn user(id: u64, donations: u64) -> User {
    User {
        id: UserId(id),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        referral_code: format!("code{id}"),
        donations_raised: donations,
        rank: 1,
        avatar: String::new(),
        joined_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        total_referrals: 0,
        badges: Vec::new(),
    }
}

fn tier(id: u64, threshold: u64) -> RewardTier {
    RewardTier::new(TierId(id), format!("Tier {id}"), "", threshold, "*")
}

fn users_strategy() -> impl Strategy<Value = Vec<User>> {
    // Small donation range so that ties actually occur.
    proptest::collection::vec((0u64..1000, 0u64..20), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, donations)| user(id, donations * 100))
            .collect()
    })
}

fn tiers_strategy() -> impl Strategy<Value = Vec<RewardTier>> {
    proptest::collection::vec((0u64..50, 1u64..100_000), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, threshold)| tier(id, threshold))
            .collect()
    })
}

proptest! {
    #[test]
    fn unlock_matches_threshold_predicate(donations in any::<u64>(), threshold in 1u64..) {
        let u = user(1, donations);
        let rewards = compute_unlocked_rewards(&u, &[tier(1, threshold)]);
        prop_assert_eq!(rewards.len(), 1);
        prop_assert_eq!(rewards[0].unlocked, donations >= threshold);
    }

    #[test]
    fn unlock_preserves_tier_order(donations in 0u64..200_000, tiers in tiers_strategy()) {
        let u = user(1, donations);
        let rewards = compute_unlocked_rewards(&u, &tiers);
        let out: Vec<&RewardTier> = rewards.iter().map(|r| &r.tier).collect();
        let input: Vec<&RewardTier> = tiers.iter().collect();
        prop_assert_eq!(out, input);
    }

    #[test]
    fn leaderboard_is_ordered(users in users_strategy()) {
        let entries = rank_leaderboard(&users);
        prop_assert_eq!(entries.len(), users.len());

        for pair in entries.windows(2) {
            let (a, b) = (&pair[0].user, &pair[1].user);
            prop_assert!(
                a.donations_raised > b.donations_raised
                    || (a.donations_raised == b.donations_raised && a.id <= b.id)
            );
        }
        for (index, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.rank as usize, index + 1);
        }
    }

    #[test]
    fn leaderboard_is_idempotent(users in users_strategy()) {
        prop_assert_eq!(rank_leaderboard(&users), rank_leaderboard(&users));
    }

    #[test]
    fn progress_is_monotone(a in 0u64..1_000_000, b in 0u64..1_000_000, threshold in 1u64..1_000_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let t = tier(1, threshold);
        let p_low = compute_progress(&user(1, low), &t);
        let p_high = compute_progress(&user(1, high), &t);

        prop_assert!(p_low.percent <= p_high.percent);
        prop_assert!(p_low.percent_clamped <= p_high.percent_clamped);
        prop_assert!(p_low.remaining >= p_high.remaining);
    }

    #[test]
    fn progress_at_threshold_is_exactly_full(threshold in 1u64..) {
        let progress = compute_progress(&user(1, threshold), &tier(1, threshold));
        let rewards = compute_unlocked_rewards(&user(1, threshold), &[tier(1, threshold)]);

        prop_assert!(rewards[0].unlocked);
        prop_assert_eq!(progress.percent.rounded(), 100);
        prop_assert_eq!(progress.percent.basis_points(), 10_000);
        prop_assert_eq!(progress.remaining, 0);
    }

    #[test]
    fn clamped_never_exceeds_full(donations in any::<u64>(), goal in 1u64..) {
        let progress = monthly_progress(&user(1, donations), goal);
        prop_assert!(progress.percent_clamped.basis_points() <= 10_000);
        prop_assert!(progress.percent_clamped <= progress.percent);
        prop_assert_eq!(progress.reached, donations >= goal);
    }

    #[test]
    fn next_goal_is_minimal_locked_tier(donations in 0u64..200_000, tiers in tiers_strategy()) {
        let u = user(1, donations);
        match next_locked_goal(&u, &tiers) {
            None => prop_assert!(tiers.iter().all(|t| donations >= t.threshold)),
            Some(next) => {
                prop_assert!(donations < next.threshold);
                for t in tiers.iter().filter(|t| donations < t.threshold) {
                    prop_assert!((next.threshold, next.id) <= (t.threshold, t.id));
                }
            }
        }
    }
}

#[test]
fn rohan_scenario() {
    let tiers: Vec<RewardTier> = [1000, 5000, 10000, 25000, 50000]
        .into_iter()
        .zip(1..)
        .map(|(threshold, id)| tier(id, threshold))
        .collect();
    let rohan = user(3, 9800);

    let flags: Vec<bool> = compute_unlocked_rewards(&rohan, &tiers)
        .iter()
        .map(|r| r.unlocked)
        .collect();
    assert_eq!(flags, vec![true, true, false, false, false]);

    let next = next_locked_goal(&rohan, &tiers).unwrap();
    assert_eq!(next.threshold, 10000);
    assert_eq!(compute_progress(&rohan, next).remaining, 200);
}
