//! # Data Provider
//!
//! Read-only access to users, the reward catalog and monthly history.
//!
//! The metrics functions never hold data themselves; a `DataProvider` is
//! injected into [`FundraisingService`](crate::service::FundraisingService)
//! so the computations stay pure and can be tested without a fixture.

use crate::error::{CoreError, Result};
use crate::reward::{RewardCatalog, RewardTier};
use crate::stats::MonthlyDonation;
use crate::types::{TierId, UserId};
use crate::user::User;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// DATAPROVIDER TRAIT
// =============================================================================

/// Source of the static inputs the metrics engine reads.
pub trait DataProvider {
    /// Lookup a user by id.
    fn get_user(&self, id: UserId) -> Option<&User>;

    /// Lookup a user by email, ignoring ASCII case.
    fn find_user_by_email(&self, email: &str) -> Option<&User>;

    /// All users in id order.
    fn list_users(&self) -> &[User];

    /// The reward catalog.
    fn reward_catalog(&self) -> &RewardCatalog;

    /// Monthly donation history of a user. Empty if none is recorded.
    fn monthly_history(&self, id: UserId) -> &[MonthlyDonation];
}

// =============================================================================
// IN-MEMORY PROVIDER
// =============================================================================

/// A provider backed by data loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    /// Users sorted by id.
    users: Vec<User>,

    /// Index: UserId -> position in `users`
    by_id: BTreeMap<UserId, usize>,

    catalog: RewardCatalog,

    /// Per-user history; users without an entry fall back to `default_history`.
    history: BTreeMap<UserId, Vec<MonthlyDonation>>,

    default_history: Vec<MonthlyDonation>,
}

impl InMemoryProvider {
    /// Create a provider, rejecting duplicate ids, emails or referral codes.
    pub fn new(mut users: Vec<User>, catalog: RewardCatalog) -> Result<Self> {
        users.sort_by_key(|u| u.id);

        let mut emails = BTreeSet::new();
        let mut codes = BTreeSet::new();
        let mut by_id = BTreeMap::new();

        for (index, user) in users.iter().enumerate() {
            if by_id.insert(user.id, index).is_some() {
                return Err(CoreError::DuplicateUser {
                    id: user.id,
                    field: "id",
                });
            }
            if !emails.insert(user.normalized_email()) {
                return Err(CoreError::DuplicateUser {
                    id: user.id,
                    field: "email",
                });
            }
            if !codes.insert(user.referral_code.clone()) {
                return Err(CoreError::DuplicateUser {
                    id: user.id,
                    field: "referralCode",
                });
            }
        }

        Ok(Self {
            users,
            by_id,
            catalog,
            history: BTreeMap::new(),
            default_history: Vec::new(),
        })
    }

    /// Set the history returned for users without their own.
    #[must_use]
    pub fn with_default_history(mut self, history: Vec<MonthlyDonation>) -> Self {
        self.default_history = history;
        self
    }

    /// Set the history of a single user. The user must already be loaded.
    pub fn with_history(mut self, id: UserId, history: Vec<MonthlyDonation>) -> Result<Self> {
        if !self.by_id.contains_key(&id) {
            return Err(CoreError::UnknownUser(id));
        }
        self.history.insert(id, history);
        Ok(self)
    }

    /// The built-in demo data set: five fundraisers, five badge tiers and
    /// a shared January to May history.
    pub fn demo() -> Result<Self> {
        let catalog = RewardCatalog::new(demo_tiers())?;
        Ok(Self::new(demo_users(), catalog)?.with_default_history(demo_history()))
    }
}

impl DataProvider for InMemoryProvider {
    fn get_user(&self, id: UserId) -> Option<&User> {
        self.by_id.get(&id).and_then(|&i| self.users.get(i))
    }

    fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.has_email(email))
    }

    fn list_users(&self) -> &[User] {
        &self.users
    }

    fn reward_catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    fn monthly_history(&self, id: UserId) -> &[MonthlyDonation] {
        self.history
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&self.default_history)
    }
}

// =============================================================================
// DEMO FIXTURE
// =============================================================================

fn avatar(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop"
    )
}

#[allow(clippy::too_many_arguments)]
fn demo_user(
    id: u64,
    name: &str,
    handle: &str,
    donations: u64,
    photo: u32,
    joined_day: u32,
    referrals: u32,
    badges: &[&str],
) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        email: format!("{handle}@example.com"),
        referral_code: format!("{handle}2025"),
        donations_raised: donations,
        rank: id as u32,
        avatar: avatar(photo),
        joined_date: NaiveDate::from_ymd_opt(2024, 12, joined_day).unwrap_or_default(),
        total_referrals: referrals,
        badges: badges.iter().map(|b| (*b).to_string()).collect(),
    }
}

fn demo_users() -> Vec<User> {
    vec![
        demo_user(
            1,
            "Aarav Mehta",
            "aarav",
            15750,
            614810,
            1,
            47,
            &["Top Performer", "Early Bird", "Milestone Master"],
        ),
        demo_user(
            2,
            "Isha Sharma",
            "isha",
            12400,
            733872,
            3,
            38,
            &["Rising Star", "Community Builder"],
        ),
        demo_user(
            3,
            "Rohan Verma",
            "rohan",
            9800,
            697509,
            5,
            29,
            &["Consistent Contributor"],
        ),
        demo_user(4, "Ananya Pillai", "ananya", 8200, 712513, 7, 25, &["Team Player"]),
        demo_user(5, "Devansh Reddy", "devansh", 6500, 1043471, 10, 18, &["Newcomer"]),
    ]
}

fn demo_tiers() -> Vec<RewardTier> {
    vec![
        RewardTier::new(TierId(1), "Bronze Badge", "Raise 1,000 in donations", 1000, "🥉"),
        RewardTier::new(TierId(2), "Silver Badge", "Raise 5,000 in donations", 5000, "🥈"),
        RewardTier::new(TierId(3), "Gold Badge", "Raise 10,000 in donations", 10000, "🥇"),
        RewardTier::new(TierId(4), "Diamond Badge", "Raise 25,000 in donations", 25000, "💎"),
        RewardTier::new(TierId(5), "Champion Badge", "Raise 50,000 in donations", 50000, "🏆"),
    ]
}

fn demo_history() -> Vec<MonthlyDonation> {
    vec![
        MonthlyDonation::new("Jan", 2500),
        MonthlyDonation::new("Feb", 3200),
        MonthlyDonation::new("Mar", 2800),
        MonthlyDonation::new("Apr", 4100),
        MonthlyDonation::new("May", 3150),
    ]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::user::sample;

    #[test]
    fn demo_fixture_loads() {
        let provider = InMemoryProvider::demo().unwrap();
        assert_eq!(provider.list_users().len(), 5);
        assert_eq!(provider.reward_catalog().len(), 5);
        assert_eq!(provider.monthly_history(UserId(1)).len(), 5);
    }

    #[test]
    fn lookup_by_id_and_email() {
        let provider = InMemoryProvider::demo().unwrap();

        let user = provider.get_user(UserId(3)).unwrap();
        assert_eq!(user.name, "Rohan Verma");

        let by_email = provider.find_user_by_email("ISHA@example.com").unwrap();
        assert_eq!(by_email.id, UserId(2));

        assert!(provider.get_user(UserId(99)).is_none());
        assert!(provider.find_user_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn users_are_listed_in_id_order() {
        let users = vec![sample(3, 0), sample(1, 0), sample(2, 0)];
        let provider = InMemoryProvider::new(users, RewardCatalog::default()).unwrap();
        let ids: Vec<u64> = provider.list_users().iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(provider.get_user(UserId(2)).map(|u| u.id), Some(UserId(2)));
    }

    #[test]
    fn rejects_duplicate_id() {
        let users = vec![sample(1, 0), sample(1, 10)];
        let err = InMemoryProvider::new(users, RewardCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateUser {
                id: UserId(1),
                field: "id"
            }
        );
    }

    #[test]
    fn rejects_duplicate_email() {
        let mut second = sample(2, 0);
        second.email = "USER1@example.com".to_string();
        let err = InMemoryProvider::new(vec![sample(1, 0), second], RewardCatalog::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateUser { field: "email", .. }));
    }

    #[test]
    fn rejects_duplicate_referral_code() {
        let mut second = sample(2, 0);
        second.referral_code = "user12025".to_string();
        let err = InMemoryProvider::new(vec![sample(1, 0), second], RewardCatalog::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateUser {
                field: "referralCode",
                ..
            }
        ));
    }

    #[test]
    fn per_user_history_overrides_default() {
        let provider = InMemoryProvider::new(vec![sample(1, 0), sample(2, 0)], RewardCatalog::default())
            .unwrap()
            .with_default_history(vec![MonthlyDonation::new("Jan", 1)])
            .with_history(UserId(2), vec![MonthlyDonation::new("Feb", 2)])
            .unwrap();

        assert_eq!(provider.monthly_history(UserId(1))[0].month, "Jan");
        assert_eq!(provider.monthly_history(UserId(2))[0].month, "Feb");
    }

    #[test]
    fn history_for_unknown_user_is_rejected() {
        let err = InMemoryProvider::new(vec![sample(1, 0)], RewardCatalog::default())
            .unwrap()
            .with_history(UserId(7), vec![MonthlyDonation::new("Jan", 1)])
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownUser(UserId(7)));
    }

    #[test]
    fn padded_email_is_a_duplicate_and_still_logs_in() {
        let mut second = sample(2, 0);
        second.email = " user1@example.com ".to_string();
        let err = InMemoryProvider::new(vec![sample(1, 0), second], RewardCatalog::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateUser { field: "email", .. }));

        let mut padded = sample(3, 0);
        padded.email = "  Padded@Example.com\t".to_string();
        let provider = InMemoryProvider::new(vec![padded], RewardCatalog::default()).unwrap();
        assert_eq!(
            provider.find_user_by_email("padded@example.com").map(|u| u.id),
            Some(UserId(3))
        );
    }
}
