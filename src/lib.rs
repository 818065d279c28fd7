//! Card ROI - Monte Carlo return-on-investment projections for card programs
//!
//! This library provides:
//! - Cardholder projections from a growth curve or explicit yearly counts
//! - Per-cardholder transaction simulation (Poisson counts, clamped normal amounts)
//! - Income and cost projections for in-house and IaaS operating models
//! - Yearly ROI series with whole-period summaries
//! - Seeded and batch (parallel) calculation

pub mod cardholders;
pub mod simulation;
pub mod projection;
pub mod request;
pub mod calculator;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cardholders::{CardholderSequence, GrowthParams, MAX_CARDHOLDERS_PER_YEAR, MAX_PROJECTION_YEARS};
pub use simulation::{SimulationParams, TransactionSimulator, YearlyAggregate};
pub use projection::{CardType, CostModel, FinancialProjector, RoiResult, RoiSummary};
pub use request::{AutomaticRoiInput, ManualRoiInput, RoiRequest};
pub use calculator::{calculate, calculate_automatic, calculate_manual, RoiCalculator};
pub use config::CalculatorConfig;
pub use error::{Result, RoiError};
