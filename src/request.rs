//! Request shapes accepted by the calculator
//!
//! Field names follow the public JSON contract (`cardType` is camelCase). The
//! other fields also accept their camelCase spelling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cardholders::GrowthParams;
use crate::projection::CostModel;

/// Growth-curve request: cardholders derived from a starting count and growth factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomaticRoiInput {
    /// Number of projection years
    pub years: i64,

    /// Target card count (cap on cardholders in any year)
    #[serde(alias = "cardsNumber")]
    pub cards_number: i64,

    #[serde(rename = "cardType")]
    pub card_type: String,

    #[serde(default)]
    pub features: Vec<String>,

    /// Cardholders in year 1 before churn
    #[serde(alias = "startingNumber")]
    pub starting_number: i64,

    /// Multiplicative growth factor per year (1.5 = +50%)
    #[serde(alias = "expectedCardsGrowthRate")]
    pub expected_cards_growth_rate: f64,
}

/// Explicit request: cardholder counts given per year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualRoiInput {
    /// Year (1-based) to cardholder count
    #[serde(alias = "explicitCardsNumber")]
    pub explicit_cards_number: BTreeMap<i64, i64>,

    #[serde(rename = "cardType")]
    pub card_type: String,

    #[serde(default)]
    pub features: Vec<String>,
}

/// Either request shape
///
/// Externally tagged: `{"automatic": {...}}` or `{"manual": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiRequest {
    Automatic(AutomaticRoiInput),
    Manual(ManualRoiInput),
}

impl AutomaticRoiInput {
    pub fn growth_params(&self) -> GrowthParams {
        GrowthParams {
            years: self.years,
            starting_number: self.starting_number,
            growth_rate: self.expected_cards_growth_rate,
            target_card_count: self.cards_number,
        }
    }

    pub fn cost_model(&self) -> CostModel {
        CostModel::from_request(&self.card_type, &self.features)
    }
}

impl ManualRoiInput {
    pub fn cost_model(&self) -> CostModel {
        CostModel::from_request(&self.card_type, &self.features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::CardType;

    #[test]
    fn test_parse_automatic() {
        let json = r#"{
            "years": 3,
            "cards_number": 50000,
            "cardType": "Virtual",
            "features": ["Rewards", "FX"],
            "starting_number": 5000,
            "expected_cards_growth_rate": 1.5
        }"#;
        let input: AutomaticRoiInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.years, 3);
        assert_eq!(input.growth_params().target_card_count, 50_000);
        assert_eq!(input.growth_params().growth_rate, 1.5);
        assert_eq!(input.cost_model(), CostModel::new(CardType::Virtual, 2));
    }

    #[test]
    fn test_parse_manual_with_string_keys() {
        let json = r#"{
            "explicit_cards_number": {"1": 10000, "3": 50000},
            "cardType": "Plastic"
        }"#;
        let input: ManualRoiInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.explicit_cards_number.get(&3), Some(&50_000));
        assert!(input.features.is_empty());
        assert_eq!(input.cost_model().card_type, CardType::Plastic);
    }

    #[test]
    fn test_camel_case_fields_accepted() {
        let json = r#"{
            "years": 2,
            "cardsNumber": 1000,
            "cardType": "Virtual",
            "startingNumber": 100,
            "expectedCardsGrowthRate": 1.2
        }"#;
        let input: AutomaticRoiInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.cards_number, 1_000);
        assert_eq!(input.starting_number, 100);
        assert_eq!(input.expected_cards_growth_rate, 1.2);

        let json = r#"{"explicitCardsNumber": {"2": 7}, "cardType": "Plastic"}"#;
        let input: ManualRoiInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.explicit_cards_number.get(&2), Some(&7));
    }

    #[test]
    fn test_non_integer_year_rejected() {
        let json = r#"{"explicit_cards_number": {"one": 5}, "cardType": "Virtual"}"#;
        assert!(serde_json::from_str::<ManualRoiInput>(json).is_err());
    }

    #[test]
    fn test_tagged_request() {
        let json = r#"{"manual": {"explicit_cards_number": {"2": 7}, "cardType": "Both", "features": []}}"#;
        let request: RoiRequest = serde_json::from_str(json).unwrap();

        match &request {
            RoiRequest::Manual(input) => {
                assert_eq!(input.explicit_cards_number.len(), 1);
                assert_eq!(input.cost_model().card_type, CardType::Other);
            }
            other => panic!("expected manual request, got {:?}", other),
        }
    }
}
