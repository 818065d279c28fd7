//! Tunable parameters for the transaction simulation

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoiError};

/// Distribution parameters for simulated cardholder behavior
///
/// Every field falls back to its default when omitted from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Mean of the transaction amount distribution
    pub target_mean: f64,

    /// Standard deviation of the transaction amount distribution
    pub std_dev: f64,

    /// Lower clamp for a single transaction amount
    pub min_value: f64,

    /// Upper clamp for a single transaction amount
    pub max_value: f64,

    /// Poisson mean of transactions per cardholder per day
    pub daily_rate: f64,

    /// Factor that annualizes the single daily draw
    pub days_per_year: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            target_mean: 13.0,
            std_dev: 7.0,
            min_value: 5.0,
            max_value: 100.0,
            daily_rate: 0.5,
            days_per_year: 365,
        }
    }
}

impl SimulationParams {
    /// Reject parameters that cannot describe a transaction distribution
    pub fn validate(&self) -> Result<()> {
        if !self.target_mean.is_finite() {
            return Err(RoiError::invalid(format!(
                "target mean must be finite, got {}",
                self.target_mean
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(RoiError::invalid(format!(
                "standard deviation must be finite and non-negative, got {}",
                self.std_dev
            )));
        }
        if !(self.min_value <= self.max_value) {
            return Err(RoiError::invalid(format!(
                "amount bounds are inverted: min {} > max {}",
                self.min_value, self.max_value
            )));
        }
        if !self.daily_rate.is_finite() || self.daily_rate <= 0.0 {
            return Err(RoiError::invalid(format!(
                "daily transaction rate must be positive, got {}",
                self.daily_rate
            )));
        }
        Ok(())
    }
}
