//! Calculator configuration

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::simulation::SimulationParams;

/// Environment variable holding a fixed simulation seed
pub const SEED_ENV_VAR: &str = "CARD_ROI_SEED";

/// Settings shared by every calculation a calculator runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Transaction distribution parameters
    pub simulation: SimulationParams,

    /// Fixed seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl CalculatorConfig {
    /// Defaults, with the seed taken from `CARD_ROI_SEED` when set
    pub fn from_env() -> Self {
        Self {
            seed: parse_seed(std::env::var(SEED_ENV_VAR).ok().as_deref()),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_simulation(mut self, simulation: SimulationParams) -> Self {
        self.simulation = simulation;
        self
    }

    /// Load simulation parameters from a JSON file
    pub fn load_simulation(path: &Path) -> Result<SimulationParams, Box<dyn std::error::Error>> {
        let file = std::fs::File::open(path)?;
        let params = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(params)
    }
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!("Ignoring {}={:?}: not an unsigned integer", SEED_ENV_VAR, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some(" 7 ")), Some(7));
        assert_eq!(parse_seed(Some("-1")), None);
        assert_eq!(parse_seed(Some("abc")), None);
        assert_eq!(parse_seed(None), None);
    }

    #[test]
    fn test_seed_override() {
        let config = CalculatorConfig::default().with_seed(Some(9));
        assert_eq!(config.seed, Some(9));

        // A missing override keeps the existing seed
        assert_eq!(config.with_seed(None).seed, Some(9));
    }

    #[test]
    fn test_config_from_json() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{"seed": 5, "simulation": {"std_dev": 3.0}}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.simulation.std_dev, 3.0);
        assert_eq!(config.simulation.target_mean, 13.0);
    }
}
