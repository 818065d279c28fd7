//! Revenue rates, scheme fees and the two operating cost models

use serde::{Deserialize, Serialize};

/// Primary scheme interchange rate
pub const PRIMARY_INTERCHANGE_RATE: f64 = 0.018;
/// Secondary scheme interchange rate
pub const SECONDARY_INTERCHANGE_RATE: f64 = 0.013;
/// Share of volume earning the primary rate
pub const PRIMARY_VOLUME_SHARE: f64 = 0.8;
/// Share of volume earning the secondary rate
pub const SECONDARY_VOLUME_SHARE: f64 = 0.2;

/// Blended interchange earned on total volume (0.017)
pub const BLENDED_INTERCHANGE_RATE: f64 = PRIMARY_VOLUME_SHARE * PRIMARY_INTERCHANGE_RATE
    + SECONDARY_VOLUME_SHARE * SECONDARY_INTERCHANGE_RATE;

pub const CROSS_BORDER_FEE: f64 = 0.0113;
pub const DIGITAL_ENABLEMENT_FEE: f64 = 0.000226;
pub const CLEARING_FEE: f64 = 0.005;
pub const PREAUTH_FEE: f64 = 0.0113;

/// Fee charged on every transaction regardless of amount
pub const PER_TRANSACTION_FEE: f64 = CLEARING_FEE + DIGITAL_ENABLEMENT_FEE + PREAUTH_FEE;

/// Assumed share of volume that crosses borders
pub const CROSS_BORDER_SHARE: f64 = 0.2;

// In-house: fixed platform cost plus linear growth in operations
pub const IN_HOUSE_FIXED_COST: f64 = 3_200_000.0;
pub const IN_HOUSE_ANNUAL_COST: f64 = 1_340_000.0;

// IaaS: one-off capex by card type plus linear service fees
pub const IAAS_ANNUAL_COST: f64 = 480_000.0;
pub const IAAS_FEATURE_ANNUAL_COST: f64 = 1_000.0;

/// Card form factor issued by the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Virtual,
    Plastic,
    /// Anything else, including combined programs
    Other,
}

impl CardType {
    /// IaaS capital expenditure for this card type
    pub fn iaas_capex(&self) -> f64 {
        match self {
            CardType::Virtual => 315_000.0,
            CardType::Plastic => 365_000.0,
            CardType::Other => 415_000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Virtual => "Virtual",
            CardType::Plastic => "Plastic",
            CardType::Other => "Other",
        }
    }
}

impl From<&str> for CardType {
    fn from(value: &str) -> Self {
        match value {
            "Virtual" => CardType::Virtual,
            "Plastic" => CardType::Plastic,
            _ => CardType::Other,
        }
    }
}

impl From<String> for CardType {
    fn from(value: String) -> Self {
        CardType::from(value.as_str())
    }
}

impl From<CardType> for String {
    fn from(value: CardType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Program parameters that drive the cost models
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    pub card_type: CardType,

    /// Number of enabled program features (names are not priced individually)
    pub feature_count: usize,
}

impl CostModel {
    pub fn new(card_type: CardType, feature_count: usize) -> Self {
        Self { card_type, feature_count }
    }

    /// Build from the raw card type string and feature list of a request
    pub fn from_request(card_type: &str, features: &[String]) -> Self {
        Self::new(CardType::from(card_type), features.len())
    }

    /// Interchange income on a year's volume
    pub fn income(volume: f64) -> f64 {
        volume * BLENDED_INTERCHANGE_RATE
    }

    /// Scheme fees charged per transaction
    pub fn fixed_fees(transaction_count: u64) -> f64 {
        transaction_count as f64 * PER_TRANSACTION_FEE
    }

    /// Fees on the cross-border share of volume
    pub fn cross_border_fees(volume: f64) -> f64 {
        volume * CROSS_BORDER_SHARE * CROSS_BORDER_FEE
    }

    /// In-house platform cost for a projection year (1-indexed)
    pub fn in_house_base_cost(year: u32) -> f64 {
        IN_HOUSE_FIXED_COST + IN_HOUSE_ANNUAL_COST * year as f64
    }

    /// IaaS platform cost for a projection year (1-indexed)
    pub fn iaas_base_cost(&self, year: u32) -> f64 {
        let annual = IAAS_ANNUAL_COST + IAAS_FEATURE_ANNUAL_COST * self.feature_count as f64;
        self.card_type.iaas_capex() + annual * year as f64
    }
}
