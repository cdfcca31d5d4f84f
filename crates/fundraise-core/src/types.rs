//! # Primitive Types
//!
//! Identifiers, monetary amounts and fixed-precision percentages.
//!
//! All arithmetic here is integer-only. Percentages are stored in
//! hundredths of a percent so that 98.5% is `Percent(9850)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a fundraiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a reward tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(pub u64);

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in whole currency units.
pub type Amount = u64;

// =============================================================================
// PERCENT
// =============================================================================

/// Scale factor: one percent expressed in `Percent` units.
pub const PERCENT_SCALE: u64 = 100;

/// 100% in `Percent` units.
pub const FULL: Percent = Percent(100 * PERCENT_SCALE);

/// A fixed-precision percentage in hundredths of a percent.
///
/// Values above 100% are legal; see [`Percent::clamped`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub u64);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Compute `100 * part / whole` truncated to hundredths of a percent.
    ///
    /// A zero `whole` yields 100%: a goal of nothing is trivially met.
    #[must_use]
    pub fn of(part: Amount, whole: Amount) -> Self {
        if whole == 0 {
            return FULL;
        }
        let scaled = u128::from(part) * u128::from(100 * PERCENT_SCALE) / u128::from(whole);
        Self(u64::try_from(scaled).unwrap_or(u64::MAX))
    }

    /// The value capped at 100%, for progress bar widths.
    #[must_use]
    pub fn clamped(self) -> Self {
        self.min(FULL)
    }

    /// Whole percent, rounded half-up. Presentation only.
    #[must_use]
    pub fn rounded(self) -> u64 {
        self.0.saturating_add(PERCENT_SCALE / 2) / PERCENT_SCALE
    }

    /// Hundredths of a percent.
    #[must_use]
    pub fn basis_points(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}%",
            self.0 / PERCENT_SCALE,
            self.0 % PERCENT_SCALE
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
