//! ROI output structures

use serde::{Deserialize, Serialize};

use super::engine::YearProjection;

/// A per-year value for each operating scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPair<T> {
    pub in_house: T,
    pub iaas: T,
}

/// Complete ROI result for one request
///
/// Sequences are parallel: index i describes year `years[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub years: Vec<u32>,
    pub incomes: Vec<f64>,
    pub costs: ScenarioPair<Vec<f64>>,
    pub net: ScenarioPair<Vec<f64>>,
    pub roi: ScenarioPair<Vec<f64>>,
    pub summary: RoiSummary,
}

/// Whole-period totals shown alongside the yearly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub projection_years: usize,
    pub total_income: f64,
    pub total_cost: ScenarioPair<f64>,

    /// Net over the full period ("total savings")
    pub total_net: ScenarioPair<f64>,

    /// Arithmetic mean of the yearly ROI percentages
    pub average_roi: ScenarioPair<f64>,

    /// First year with positive net, if any
    pub break_even_year: ScenarioPair<Option<u32>>,
}

/// Flat per-year row for tabular export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiRow {
    pub year: u32,
    pub income: f64,
    pub in_house_cost: f64,
    pub iaas_cost: f64,
    pub in_house_net: f64,
    pub iaas_net: f64,
    pub in_house_roi_pct: f64,
    pub iaas_roi_pct: f64,
}

impl RoiResult {
    /// Assemble parallel year series from projected years
    pub fn from_projections(projections: &[YearProjection]) -> Self {
        let column = |f: fn(&YearProjection) -> f64| projections.iter().map(f).collect::<Vec<f64>>();

        let years: Vec<u32> = projections.iter().map(|p| p.year).collect();
        let incomes = column(|p| p.income);
        let costs = ScenarioPair {
            in_house: column(|p| p.in_house_cost),
            iaas: column(|p| p.iaas_cost),
        };
        let net = ScenarioPair {
            in_house: column(|p| p.in_house_net),
            iaas: column(|p| p.iaas_net),
        };
        let roi = ScenarioPair {
            in_house: column(|p| p.in_house_roi),
            iaas: column(|p| p.iaas_roi),
        };

        let summary = RoiSummary {
            projection_years: years.len(),
            total_income: incomes.iter().sum(),
            total_cost: ScenarioPair {
                in_house: costs.in_house.iter().sum(),
                iaas: costs.iaas.iter().sum(),
            },
            total_net: ScenarioPair {
                in_house: net.in_house.iter().sum(),
                iaas: net.iaas.iter().sum(),
            },
            average_roi: ScenarioPair {
                in_house: mean(&roi.in_house),
                iaas: mean(&roi.iaas),
            },
            break_even_year: ScenarioPair {
                in_house: break_even(&years, &net.in_house),
                iaas: break_even(&years, &net.iaas),
            },
        };

        Self {
            years,
            incomes,
            costs,
            net,
            roi,
            summary,
        }
    }

    /// Number of projected years
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Per-year rows, in year order
    pub fn rows(&self) -> Vec<RoiRow> {
        (0..self.len())
            .map(|i| RoiRow {
                year: self.years[i],
                income: self.incomes[i],
                in_house_cost: self.costs.in_house[i],
                iaas_cost: self.costs.iaas[i],
                in_house_net: self.net.in_house[i],
                iaas_net: self.net.iaas[i],
                in_house_roi_pct: self.roi.in_house[i],
                iaas_roi_pct: self.roi.iaas[i],
            })
            .collect()
    }

    /// Write the yearly table as CSV with a header row
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in self.rows() {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn break_even(years: &[u32], net: &[f64]) -> Option<u32> {
    years
        .iter()
        .zip(net)
        .find(|(_, &n)| n > 0.0)
        .map(|(&year, _)| year)
}
