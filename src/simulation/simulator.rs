//! Per-cardholder transaction sampling and yearly aggregation

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};
use serde::{Deserialize, Serialize};

use super::params::SimulationParams;
use crate::cardholders::CardholderSequence;
use crate::error::{Result, RoiError};

/// Simulated transaction totals for one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyAggregate {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Cardholders simulated this year
    pub cardholders: u64,

    /// Total transactions across all cardholders
    pub transaction_count: u64,

    /// Total transaction volume across all cardholders
    pub volume: f64,
}

impl YearlyAggregate {
    /// Aggregate for a year with no activity
    pub fn empty(year: u32) -> Self {
        Self {
            year,
            cardholders: 0,
            transaction_count: 0,
            volume: 0.0,
        }
    }
}

/// Monte Carlo transaction simulator
///
/// Each cardholder draws one daily transaction count from a Poisson distribution and
/// scales it to a full year (one draw times 365, not a sum of 365 draws), then draws
/// one clamped normal transaction amount.
#[derive(Debug, Clone)]
pub struct TransactionSimulator {
    params: SimulationParams,
    daily_counts: Poisson<f64>,
    amounts: Normal<f64>,
}

impl TransactionSimulator {
    /// Build the sampling distributions for the given parameters
    pub fn new(params: SimulationParams) -> Result<Self> {
        params.validate()?;

        let daily_counts = Poisson::new(params.daily_rate)
            .map_err(|e| RoiError::RandomSourceFailure(format!("daily count distribution: {}", e)))?;
        let amounts = Normal::new(params.target_mean, params.std_dev)
            .map_err(|e| RoiError::RandomSourceFailure(format!("amount distribution: {}", e)))?;

        Ok(Self {
            params,
            daily_counts,
            amounts,
        })
    }

    /// Sample one cardholder's annual (transaction count, volume)
    pub fn sample_cardholder<R: Rng + ?Sized>(&self, rng: &mut R) -> (u64, f64) {
        let daily = self.daily_counts.sample(rng) as u64;
        let annual_count = daily * self.params.days_per_year as u64;

        let amount = self
            .amounts
            .sample(rng)
            .clamp(self.params.min_value, self.params.max_value);

        (annual_count, annual_count as f64 * amount)
    }

    /// Simulate every cardholder in one year and sum the results
    ///
    /// A year without cardholders never touches the random source.
    pub fn simulate_year<R: Rng + ?Sized>(&self, year: u32, cardholders: u64, rng: &mut R) -> YearlyAggregate {
        let mut aggregate = YearlyAggregate::empty(year);
        aggregate.cardholders = cardholders;

        for _ in 0..cardholders {
            let (count, volume) = self.sample_cardholder(rng);
            aggregate.transaction_count += count;
            aggregate.volume += volume;
        }

        aggregate
    }

    /// Simulate all projection years in order
    pub fn simulate<R: Rng + ?Sized>(&self, cardholders: &CardholderSequence, rng: &mut R) -> Vec<YearlyAggregate> {
        let aggregates: Vec<YearlyAggregate> = cardholders
            .iter()
            .enumerate()
            .map(|(i, n)| self.simulate_year(i as u32 + 1, n, rng))
            .collect();

        debug!(
            "Simulated {} years, {} cardholder-years",
            aggregates.len(),
            cardholders.total()
        );

        aggregates
    }
}
