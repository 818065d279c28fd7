//! Financial projection of simulated transaction volume

use super::costs::CostModel;
use super::result::RoiResult;
use crate::error::{Result, RoiError, Scenario};
use crate::simulation::YearlyAggregate;

/// Income, cost and ROI for both operating scenarios in one year
#[derive(Debug, Clone, PartialEq)]
pub struct YearProjection {
    /// Projection year (1-indexed)
    pub year: u32,

    // Activity
    pub transaction_count: u64,
    pub volume: f64,

    // Revenue and scheme fees (shared by both scenarios)
    pub income: f64,
    pub fixed_fees: f64,
    pub cross_border_fees: f64,

    // Platform base costs
    pub in_house_base_cost: f64,
    pub iaas_base_cost: f64,

    // Totals
    pub in_house_cost: f64,
    pub iaas_cost: f64,
    pub in_house_net: f64,
    pub iaas_net: f64,

    /// ROI as a percentage of total cost
    pub in_house_roi: f64,
    pub iaas_roi: f64,
}

/// Converts yearly transaction aggregates into income, costs and ROI
#[derive(Debug, Clone)]
pub struct FinancialProjector {
    cost_model: CostModel,
}

impl FinancialProjector {
    pub fn new(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    /// Project a single year
    pub fn project_year(&self, aggregate: &YearlyAggregate) -> Result<YearProjection> {
        let year = aggregate.year;
        let income = CostModel::income(aggregate.volume);
        let fixed_fees = CostModel::fixed_fees(aggregate.transaction_count);
        let cross_border_fees = CostModel::cross_border_fees(aggregate.volume);

        let in_house_base_cost = CostModel::in_house_base_cost(year);
        let iaas_base_cost = self.cost_model.iaas_base_cost(year);

        let in_house_cost = in_house_base_cost + fixed_fees + cross_border_fees;
        let iaas_cost = iaas_base_cost + fixed_fees + cross_border_fees;

        let in_house_net = income - in_house_cost;
        let iaas_net = income - iaas_cost;

        Ok(YearProjection {
            year,
            transaction_count: aggregate.transaction_count,
            volume: aggregate.volume,
            income,
            fixed_fees,
            cross_border_fees,
            in_house_base_cost,
            iaas_base_cost,
            in_house_cost,
            iaas_cost,
            in_house_net,
            iaas_net,
            in_house_roi: roi_pct(in_house_net, in_house_cost, year, Scenario::InHouse)?,
            iaas_roi: roi_pct(iaas_net, iaas_cost, year, Scenario::Iaas)?,
        })
    }

    /// Project every year and assemble the result
    pub fn project(&self, aggregates: &[YearlyAggregate]) -> Result<RoiResult> {
        let years = aggregates
            .iter()
            .map(|agg| self.project_year(agg))
            .collect::<Result<Vec<_>>>()?;

        Ok(RoiResult::from_projections(&years))
    }
}

/// Net profit over total cost, as a percentage
///
/// A zero (or non-finite) cost leaves ROI undefined and fails the year.
fn roi_pct(net: f64, total_cost: f64, year: u32, scenario: Scenario) -> Result<f64> {
    if total_cost == 0.0 || !total_cost.is_finite() {
        return Err(RoiError::DivisionByZero {
            year,
            scenario,
            total_cost,
        });
    }
    Ok(net / total_cost * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::CardType;
    use approx::assert_relative_eq;

    fn aggregate(year: u32, count: u64, volume: f64) -> YearlyAggregate {
        YearlyAggregate {
            year,
            cardholders: 0,
            transaction_count: count,
            volume,
        }
    }

    fn projector() -> FinancialProjector {
        FinancialProjector::new(CostModel::new(CardType::Virtual, 0))
    }

    #[test]
    fn test_no_activity_year() {
        let p = projector().project_year(&aggregate(1, 0, 0.0)).unwrap();

        assert_eq!(p.income, 0.0);
        assert_eq!(p.in_house_cost, 4_540_000.0);
        assert_eq!(p.in_house_net, -4_540_000.0);
        assert_eq!(p.in_house_roi, -100.0);

        assert_eq!(p.iaas_cost, 795_000.0);
        assert_eq!(p.iaas_net, -795_000.0);
        assert_eq!(p.iaas_roi, -100.0);
    }

    #[test]
    fn test_fixed_aggregate() {
        // 10k cardholders averaging 182.5 txns at ~13 each
        let count = 1_825_000;
        let volume = 23_725_000.0;
        let p = projector().project_year(&aggregate(2, count, volume)).unwrap();

        let fees = count as f64 * 0.016526;
        let cross_border = volume * 0.2 * 0.0113;
        assert_relative_eq!(p.income, volume * 0.017, max_relative = 1e-12);
        assert_relative_eq!(p.fixed_fees, fees, max_relative = 1e-12);
        assert_relative_eq!(p.cross_border_fees, cross_border, max_relative = 1e-12);

        assert_relative_eq!(p.in_house_cost, 5_880_000.0 + fees + cross_border, max_relative = 1e-12);
        assert_relative_eq!(p.iaas_cost, 315_000.0 + 960_000.0 + fees + cross_border, max_relative = 1e-12);
        assert_relative_eq!(p.iaas_net, p.income - p.iaas_cost, max_relative = 1e-12);
        assert_relative_eq!(p.iaas_roi, p.iaas_net / p.iaas_cost * 100.0, max_relative = 1e-12);

        // IaaS is cheaper than running the platform in-house
        assert!(p.iaas_roi > p.in_house_roi);
    }

    #[test]
    fn test_features_raise_iaas_cost_only() {
        let plain = projector().project_year(&aggregate(3, 100, 1_000.0)).unwrap();
        let featured = FinancialProjector::new(CostModel::new(CardType::Virtual, 4))
            .project_year(&aggregate(3, 100, 1_000.0))
            .unwrap();

        assert_eq!(featured.in_house_cost, plain.in_house_cost);
        assert_relative_eq!(featured.iaas_cost - plain.iaas_cost, 12_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_undefined_roi_fails() {
        let err = roi_pct(10.0, 0.0, 4, Scenario::Iaas).unwrap_err();
        assert_eq!(
            err,
            RoiError::DivisionByZero {
                year: 4,
                scenario: Scenario::Iaas,
                total_cost: 0.0
            }
        );

        let overflow = projector().project_year(&aggregate(1, 0, f64::INFINITY));
        assert!(matches!(overflow, Err(RoiError::DivisionByZero { year: 1, .. })));
    }

    #[test]
    fn test_project_keeps_year_order() {
        let aggs = vec![aggregate(1, 0, 0.0), aggregate(2, 0, 0.0), aggregate(3, 0, 0.0)];
        let result = projector().project(&aggs).unwrap();
        assert_eq!(result.years, vec![1, 2, 3]);
        assert_eq!(result.costs.in_house, vec![4_540_000.0, 5_880_000.0, 7_220_000.0]);
    }
}
