//! ROI calculation entry points
//!
//! Both request shapes share one pipeline: cardholder sequence, transaction
//! simulation, financial projection. Each calculation owns its random generator,
//! so independent requests can run concurrently.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::cardholders::{explicit_cardholders, growth_cardholders, CardholderSequence};
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::projection::{CostModel, FinancialProjector, RoiResult};
use crate::request::{AutomaticRoiInput, ManualRoiInput, RoiRequest};
use crate::simulation::{SimulationParams, TransactionSimulator};

/// Shared pipeline once cardholders are known
fn run_pipeline<R: Rng + ?Sized>(
    cardholders: &CardholderSequence,
    cost_model: CostModel,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<RoiResult> {
    let simulator = TransactionSimulator::new(*params)?;
    let aggregates = simulator.simulate(cardholders, rng);
    FinancialProjector::new(cost_model).project(&aggregates)
}

/// ROI for a growth-curve request
pub fn calculate_automatic<R: Rng + ?Sized>(
    input: &AutomaticRoiInput,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<RoiResult> {
    let cardholders = growth_cardholders(&input.growth_params())?;
    debug!("Automatic request: {} years, cardholders {:?}", cardholders.years(), cardholders.as_slice());
    run_pipeline(&cardholders, input.cost_model(), params, rng)
}

/// ROI for an explicit year-by-year request
pub fn calculate_manual<R: Rng + ?Sized>(
    input: &ManualRoiInput,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<RoiResult> {
    let cardholders = explicit_cardholders(&input.explicit_cards_number)?;
    debug!("Manual request: {} years, cardholders {:?}", cardholders.years(), cardholders.as_slice());
    run_pipeline(&cardholders, input.cost_model(), params, rng)
}

/// ROI for either request shape
pub fn calculate<R: Rng + ?Sized>(request: &RoiRequest, params: &SimulationParams, rng: &mut R) -> Result<RoiResult> {
    match request {
        RoiRequest::Automatic(input) => calculate_automatic(input, params, rng),
        RoiRequest::Manual(input) => calculate_manual(input, params, rng),
    }
}

/// Calculator holding configuration for repeated runs
///
/// # Example
/// ```ignore
/// let calculator = RoiCalculator::new(CalculatorConfig::default().with_seed(Some(42)));
/// let result = calculator.run(&request)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoiCalculator {
    config: CalculatorConfig,
}

impl RoiCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Calculator configured from the environment
    pub fn from_env() -> Self {
        Self::new(CalculatorConfig::from_env())
    }

    /// Fresh generator for one calculation (`offset` separates batch entries)
    fn rng(&self, offset: u64) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(offset)),
            None => SmallRng::from_os_rng(),
        }
    }

    /// Run a single request
    pub fn run(&self, request: &RoiRequest) -> Result<RoiResult> {
        calculate(request, &self.config.simulation, &mut self.rng(0))
    }

    pub fn automatic(&self, input: &AutomaticRoiInput) -> Result<RoiResult> {
        calculate_automatic(input, &self.config.simulation, &mut self.rng(0))
    }

    pub fn manual(&self, input: &ManualRoiInput) -> Result<RoiResult> {
        calculate_manual(input, &self.config.simulation, &mut self.rng(0))
    }

    /// Run independent requests in parallel
    ///
    /// With a seed, request `i` uses `seed + i`, so batch output is reproducible
    /// regardless of scheduling. A failed request does not affect the others.
    pub fn run_batch(&self, requests: &[RoiRequest]) -> Vec<Result<RoiResult>> {
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| calculate(request, &self.config.simulation, &mut self.rng(i as u64)))
            .collect()
    }
}
