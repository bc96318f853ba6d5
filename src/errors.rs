use thiserror::Error;

use crate::types::{FormField, MortgageType};
use crate::validation::ErrorMap;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("missing required fields: {}", .0.describe_missing())]
    MissingFields(ErrorMap),

    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: FormField,
        message: String,
    },

    #[error("{mortgage_type} repayments are not yet supported")]
    UnsupportedMortgageType {
        mortgage_type: MortgageType,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
