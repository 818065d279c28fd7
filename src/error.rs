//! Error types for ROI calculations

use thiserror::Error;

/// Cost scenario a failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    InHouse,
    Iaas,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::InHouse => write!(f, "in-house"),
            Scenario::Iaas => write!(f, "IaaS"),
        }
    }
}

/// Errors raised by the ROI engine
///
/// Any error aborts the whole calculation; there is no partial-result mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoiError {
    /// Request rejected before any simulation ran
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Total cost for a year was zero (or not finite), so ROI is undefined
    #[error("ROI undefined for year {year}: {scenario} total cost is {total_cost}")]
    DivisionByZero {
        year: u32,
        scenario: Scenario,
        total_cost: f64,
    },

    /// A sampling distribution could not be built
    #[error("Random source failure: {0}")]
    RandomSourceFailure(String),
}

impl RoiError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        RoiError::InvalidInput(message.into())
    }

    /// Whether the caller supplied a bad request (as opposed to an engine failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RoiError::InvalidInput(_))
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, RoiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RoiError::invalid("years must be positive, got 0");
        assert_eq!(err.to_string(), "Invalid input: years must be positive, got 0");
        assert!(err.is_invalid_input());

        let err = RoiError::DivisionByZero {
            year: 2,
            scenario: Scenario::Iaas,
            total_cost: 0.0,
        };
        assert_eq!(err.to_string(), "ROI undefined for year 2: IaaS total cost is 0");
        assert!(!err.is_invalid_input());
    }
}
