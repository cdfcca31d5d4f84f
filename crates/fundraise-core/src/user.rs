//! # User Record
//!
//! A fundraiser as loaded from the data provider. Immutable after load.

use crate::{Amount, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fundraiser.
///
/// `rank` is the rank recorded alongside the fixture. It is advisory:
/// the leaderboard recomputes rank from `donations_raised` on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub donations_raised: Amount,
    pub rank: u32,
    pub avatar: String,
    pub joined_date: NaiveDate,
    pub total_referrals: u32,
    pub badges: Vec<String>,
}

impl User {
    /// Check whether this user's email matches, ignoring ASCII case and
    /// surrounding whitespace on both sides.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }

    /// The email as used for matching and uniqueness.
    #[must_use]
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
pub(crate) fn sample(id: u64, donations: Amount) -> User {
    User {
        id: UserId(id),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        referral_code: format!("user{id}2025"),
        donations_raised: donations,
        rank: 0,
        avatar: String::new(),
        joined_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap_or_default(),
        total_referrals: 0,
        badges: Vec::new(),
    }
}
