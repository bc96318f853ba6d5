use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::types::{FormField, MortgageType};

/// raw values collected by the form for one submission
///
/// `None` is an unset field. Zero is kept as zero, it is up to the validator
/// to treat it as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub amount: Option<Money>,
    pub term_years: Option<u32>,
    pub interest_rate: Option<Rate>,
    pub mortgage_type: Option<MortgageType>,
}

impl MortgageInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn mortgage_type(mut self, mortgage_type: MortgageType) -> Self {
        self.mortgage_type = Some(mortgage_type);
        self
    }

    /// build from the text of the four inputs
    pub fn from_text(amount: &str, term_years: &str, interest_rate: &str, mortgage_type: &str) -> Self {
        Self {
            amount: parse_amount(amount),
            term_years: parse_term_years(term_years),
            interest_rate: parse_interest_rate(interest_rate),
            mortgage_type: parse_mortgage_type(mortgage_type),
        }
    }

    /// update one field from its raw text
    pub fn set_text(&mut self, field: FormField, text: &str) {
        match field {
            FormField::Amount => self.amount = parse_amount(text),
            FormField::Term => self.term_years = parse_term_years(text),
            FormField::InterestRate => self.interest_rate = parse_interest_rate(text),
            FormField::Type => self.mortgage_type = parse_mortgage_type(text),
        }
    }

    /// whether a field holds a usable (non-empty, non-zero) value
    pub fn is_filled(&self, field: FormField) -> bool {
        match field {
            FormField::Amount => self.amount.is_some_and(|a| !a.is_zero()),
            FormField::Term => self.term_years.is_some_and(|t| t != 0),
            FormField::InterestRate => self.interest_rate.is_some_and(|r| !r.is_zero()),
            FormField::Type => self.mortgage_type.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// a complete set of inputs, ready for calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageTerms {
    pub amount: Money,
    pub term_years: u32,
    pub interest_rate: Rate,
    pub mortgage_type: MortgageType,
}

impl MortgageTerms {
    pub fn new(amount: Money, term_years: u32, interest_rate: Rate, mortgage_type: MortgageType) -> Self {
        Self {
            amount,
            term_years,
            interest_rate,
            mortgage_type,
        }
    }

    /// repayment mortgage with the rate given in percent
    pub fn repayment(amount: Money, term_years: u32, rate_percent: Decimal) -> Self {
        Self::new(
            amount,
            term_years,
            Rate::from_percentage(rate_percent),
            MortgageType::Repayment,
        )
    }
}

impl From<MortgageTerms> for MortgageInput {
    fn from(terms: MortgageTerms) -> Self {
        Self {
            amount: Some(terms.amount),
            term_years: Some(terms.term_years),
            interest_rate: Some(terms.interest_rate),
            mortgage_type: Some(terms.mortgage_type),
        }
    }
}

// unparsable text counts as unset, like an empty input

pub fn parse_amount(text: &str) -> Option<Money> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Money::from_str(text).ok()
}

pub fn parse_term_years(text: &str) -> Option<u32> {
    let value = Decimal::from_str(text.trim()).ok()?;
    if !value.fract().is_zero() {
        return None;
    }
    value.to_u32()
}

pub fn parse_interest_rate(text: &str) -> Option<Rate> {
    Decimal::from_str(text.trim()).ok().map(Rate::from_percentage)
}

pub fn parse_mortgage_type(text: &str) -> Option<MortgageType> {
    MortgageType::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_log::test;

    #[test]
    fn test_from_text() {
        let input = MortgageInput::from_text("200000", "25", "5.25", "Repayment");
        assert_eq!(input.amount, Some(Money::from_major(200_000)));
        assert_eq!(input.term_years, Some(25));
        assert_eq!(input.interest_rate, Some(Rate::from_percentage(dec!(5.25))));
        assert_eq!(input.mortgage_type, Some(MortgageType::Repayment));
    }

    #[test]
    fn test_empty_and_garbage_text_is_unset() {
        let input = MortgageInput::from_text("", "  ", "abc", "Fixed");
        assert!(input.is_empty());
    }

    #[test]
    fn test_term_must_be_whole_years() {
        assert_eq!(parse_term_years("30"), Some(30));
        assert_eq!(parse_term_years("30.0"), Some(30));
        assert_eq!(parse_term_years("12.5"), None);
        assert_eq!(parse_term_years("-5"), None);
        assert_eq!(parse_term_years("0"), Some(0));
    }

    #[test]
    fn test_zero_is_kept_but_not_filled() {
        let input = MortgageInput::from_text("0", "0", "0", "Interest Only");
        assert_eq!(input.amount, Some(Money::ZERO));
        assert_eq!(input.term_years, Some(0));
        assert!(!input.is_filled(FormField::Amount));
        assert!(!input.is_filled(FormField::Term));
        assert!(!input.is_filled(FormField::InterestRate));
        assert!(input.is_filled(FormField::Type));
    }

    #[test]
    fn test_set_text_replaces_single_field() {
        let mut input = MortgageInput::from_text("1000", "5", "3", "Repayment");
        input.set_text(FormField::Amount, "");
        assert_eq!(input.amount, None);
        assert_eq!(input.term_years, Some(5));
    }
}
