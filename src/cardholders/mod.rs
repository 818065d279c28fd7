//! Cardholder count projections
//!
//! Turns either a growth curve or an explicit year map into a dense
//! per-year sequence of cardholder counts.

mod explicit;
mod growth;

pub use explicit::explicit_cardholders;
pub use growth::{growth_cardholders, GrowthParams, CHURN_RATE};

use serde::{Deserialize, Serialize};

/// Longest projection horizon accepted, in years
pub const MAX_PROJECTION_YEARS: i64 = 100;

/// Most cardholders accepted in any single year (explicit count or growth target)
///
/// Every cardholder is sampled individually, so this bounds the work per year.
pub const MAX_CARDHOLDERS_PER_YEAR: i64 = 10_000_000;

/// Cardholder counts by projection year (index 0 = year 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardholderSequence(Vec<u64>);

impl CardholderSequence {
    pub fn new(counts: Vec<u64>) -> Self {
        Self(counts)
    }

    /// Number of projected years
    pub fn years(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cardholders in a given projection year (1-indexed)
    pub fn get_year(&self, year: u32) -> Option<u64> {
        if year == 0 {
            return None;
        }
        self.0.get(year as usize - 1).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}
