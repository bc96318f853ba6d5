use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::CalculatorError;

/// unique identifier for a form submission
pub type SubmissionId = Uuid;

/// mortgage repayment type offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageType {
    /// capital and interest repaid over the term
    Repayment,
    /// interest paid monthly, principal at maturity
    InterestOnly,
}

impl MortgageType {
    pub const ALL: [MortgageType; 2] = [MortgageType::Repayment, MortgageType::InterestOnly];

    /// label shown next to the radio option
    pub fn label(&self) -> &'static str {
        match self {
            MortgageType::Repayment => "Repayment",
            MortgageType::InterestOnly => "Interest Only",
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MortgageType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "repayment" => Ok(MortgageType::Repayment),
            "interestonly" => Ok(MortgageType::InterestOnly),
            _ => Err(CalculatorError::InvalidInput {
                field: FormField::Type,
                message: format!("unknown mortgage type '{}'", s.trim()),
            }),
        }
    }
}

/// the four required form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "mortgage_amount")]
    Amount,
    #[serde(rename = "mortgage_term")]
    Term,
    #[serde(rename = "mortgage_interest")]
    InterestRate,
    #[serde(rename = "mortgage_type")]
    Type,
}

impl FormField {
    /// all fields in form order
    pub const ALL: [FormField; 4] = [
        FormField::Amount,
        FormField::Term,
        FormField::InterestRate,
        FormField::Type,
    ];

    /// input name used by the form markup
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Amount => "mortgage_amount",
            FormField::Term => "mortgage_term",
            FormField::InterestRate => "mortgage_interest",
            FormField::Type => "mortgage_type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Amount => "Mortgage Amount",
            FormField::Term => "Mortgage Term",
            FormField::InterestRate => "Interest Rate",
            FormField::Type => "Mortgage Type",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
