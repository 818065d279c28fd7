//! Monte Carlo simulation of cardholder transaction activity

mod params;
mod simulator;

pub use params::SimulationParams;
pub use simulator::{TransactionSimulator, YearlyAggregate};
