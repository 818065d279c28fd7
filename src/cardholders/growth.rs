//! Growth-curve cardholder projection

use super::{CardholderSequence, MAX_CARDHOLDERS_PER_YEAR, MAX_PROJECTION_YEARS};
use crate::error::{Result, RoiError};

/// Share of projected cardholders lost to attrition each year
pub const CHURN_RATE: f64 = 0.1;

/// Inputs for an exponential adoption curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthParams {
    /// Number of projection years
    pub years: i64,

    /// Cardholders at year 1, before churn
    pub starting_number: i64,

    /// Multiplicative factor per year (1.0 = flat, not a percentage)
    pub growth_rate: f64,

    /// Upper bound on cardholders in any year
    pub target_card_count: i64,
}

impl GrowthParams {
    fn validate(&self) -> Result<()> {
        if self.years <= 0 || self.years > MAX_PROJECTION_YEARS {
            return Err(RoiError::invalid(format!(
                "years must be in 1..={}, got {}",
                MAX_PROJECTION_YEARS, self.years
            )));
        }
        if self.starting_number < 0 {
            return Err(RoiError::invalid(format!(
                "starting number must be non-negative, got {}",
                self.starting_number
            )));
        }
        if self.target_card_count < 0 || self.target_card_count > MAX_CARDHOLDERS_PER_YEAR {
            return Err(RoiError::invalid(format!(
                "target card count must be in 0..={}, got {}",
                MAX_CARDHOLDERS_PER_YEAR, self.target_card_count
            )));
        }
        if !self.growth_rate.is_finite() || self.growth_rate < 0.0 {
            return Err(RoiError::invalid(format!(
                "growth rate must be a finite non-negative factor, got {}",
                self.growth_rate
            )));
        }
        Ok(())
    }

    /// Projected count for a 0-based period before churn and cap
    ///
    /// A program with no starting cardholders stays at zero even when the
    /// growth factor overflows.
    pub fn raw_count(&self, period: u32) -> f64 {
        if self.starting_number == 0 {
            return 0.0;
        }
        self.starting_number as f64 * self.growth_rate.powi(period as i32)
    }
}

/// Project cardholders along a compounding growth curve
///
/// Year i (0-based) gets `starting * rate^i`, less churn, capped at the target
/// and truncated to whole cardholders.
pub fn growth_cardholders(params: &GrowthParams) -> Result<CardholderSequence> {
    params.validate()?;

    let cap = params.target_card_count as f64;
    let counts = (0..params.years as u32)
        .map(|period| {
            let retained = params.raw_count(period) * (1.0 - CHURN_RATE);
            // `as` saturates, so an overflowing curve still lands on the cap
            retained.min(cap) as u64
        })
        .collect();

    Ok(CardholderSequence::new(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(years: i64, starting: i64, rate: f64, target: i64) -> GrowthParams {
        GrowthParams {
            years,
            starting_number: starting,
            growth_rate: rate,
            target_card_count: target,
        }
    }

    #[test]
    fn test_flat_growth_applies_churn() {
        let p = params(4, 100, 1.0, 1_000);
        for period in 0..4 {
            assert_eq!(p.raw_count(period), 100.0);
        }

        let seq = growth_cardholders(&p).unwrap();
        assert_eq!(seq.as_slice(), &[90, 90, 90, 90]);
    }

    #[test]
    fn test_compounding_growth_truncates() {
        // 5000 * 1.5^i * 0.9 = 4500, 6750, 10125
        let seq = growth_cardholders(&params(3, 5_000, 1.5, 50_000)).unwrap();
        assert_eq!(seq.as_slice(), &[4_500, 6_750, 10_125]);

        // 7 * 0.9 = 6.3 -> 6
        let seq = growth_cardholders(&params(1, 7, 1.0, 100)).unwrap();
        assert_eq!(seq.as_slice(), &[6]);
    }

    #[test]
    fn test_never_exceeds_target() {
        for &rate in &[0.0, 0.5, 1.0, 1.5, 3.0, 100.0, 1e6] {
            let seq = growth_cardholders(&params(12, 10_000, rate, 25_000)).unwrap();
            assert_eq!(seq.years(), 12);
            assert!(seq.iter().all(|c| c <= 25_000), "rate {} exceeded cap", rate);
        }
    }

    #[test]
    fn test_zero_rate_keeps_first_year_only() {
        let seq = growth_cardholders(&params(3, 1_000, 0.0, 5_000)).unwrap();
        assert_eq!(seq.as_slice(), &[900, 0, 0]);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(growth_cardholders(&params(0, 100, 1.0, 100)).unwrap_err().is_invalid_input());
        assert!(growth_cardholders(&params(-2, 100, 1.0, 100)).is_err());
        assert!(growth_cardholders(&params(3, -1, 1.0, 100)).is_err());
        assert!(growth_cardholders(&params(3, 100, 1.0, -5)).is_err());
        assert!(growth_cardholders(&params(3, 100, -1.1, 100)).is_err());
        assert!(growth_cardholders(&params(3, 100, f64::NAN, 100)).is_err());
        assert!(growth_cardholders(&params(3, 100, f64::INFINITY, 100)).is_err());
    }

    #[test]
    fn test_zero_start_stays_zero_under_overflow() {
        // 1e6^52 overflows f64, which must not turn an empty program into the cap
        let p = params(60, 0, 1e6, 25_000);
        assert!(p.growth_rate.powi(59).is_infinite());

        let seq = growth_cardholders(&p).unwrap();
        assert_eq!(seq.years(), 60);
        assert_eq!(seq.total(), 0);
    }

    #[test]
    fn test_oversized_requests_rejected() {
        let widest = params(MAX_PROJECTION_YEARS, 1, 1.0, MAX_CARDHOLDERS_PER_YEAR);
        let at_limit = growth_cardholders(&widest).unwrap();
        assert_eq!(at_limit.years(), MAX_PROJECTION_YEARS as usize);

        let too_long = growth_cardholders(&params(MAX_PROJECTION_YEARS + 1, 1, 1.0, 100));
        assert!(too_long.unwrap_err().is_invalid_input());
        assert!(growth_cardholders(&params(i32::MAX as i64, 1, 1.0, 100)).is_err());

        let too_many = growth_cardholders(&params(3, 1, 1.0, MAX_CARDHOLDERS_PER_YEAR + 1));
        assert!(too_many.unwrap_err().is_invalid_input());
    }
}
