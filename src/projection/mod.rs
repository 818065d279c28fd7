//! Financial projection: income, scenario costs and ROI per year

mod costs;
mod engine;
mod result;

pub use costs::{
    CardType, CostModel, BLENDED_INTERCHANGE_RATE, CLEARING_FEE, CROSS_BORDER_FEE,
    CROSS_BORDER_SHARE, DIGITAL_ENABLEMENT_FEE, PER_TRANSACTION_FEE, PREAUTH_FEE,
};
pub use engine::{FinancialProjector, YearProjection};
pub use result::{RoiResult, RoiRow, RoiSummary, ScenarioPair};
