//! Explicit year-by-year cardholder counts

use std::collections::BTreeMap;

use super::{CardholderSequence, MAX_CARDHOLDERS_PER_YEAR, MAX_PROJECTION_YEARS};
use crate::error::{Result, RoiError};

/// Expand a `year -> count` map into a dense sequence
///
/// Years run from 1 to the largest supplied year; gaps count as zero cardholders.
pub fn explicit_cardholders(counts: &BTreeMap<i64, i64>) -> Result<CardholderSequence> {
    let max_year = match counts.keys().next_back() {
        Some(&year) => year,
        None => return Err(RoiError::invalid("explicit cardholder map is empty")),
    };

    // Keys are ordered, so the first one is the smallest
    if let Some(&first) = counts.keys().next() {
        if first <= 0 {
            return Err(RoiError::invalid(format!(
                "years are 1-based, got year {}",
                first
            )));
        }
    }
    if max_year > MAX_PROJECTION_YEARS {
        return Err(RoiError::invalid(format!(
            "year {} is beyond the {}-year projection limit",
            max_year, MAX_PROJECTION_YEARS
        )));
    }
    if let Some((year, count)) = counts
        .iter()
        .find(|(_, &count)| !(0..=MAX_CARDHOLDERS_PER_YEAR).contains(&count))
    {
        return Err(RoiError::invalid(format!(
            "cardholder count for year {} must be in 0..={}, got {}",
            year, MAX_CARDHOLDERS_PER_YEAR, count
        )));
    }

    let sequence = (1..=max_year)
        .map(|year| counts.get(&year).copied().unwrap_or(0) as u64)
        .collect();

    Ok(CardholderSequence::new(sequence))
}
