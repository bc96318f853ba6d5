use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{CalculatorConfig, REQUIRED_FIELD_MESSAGE};
use crate::input::{MortgageInput, MortgageTerms};
use crate::types::FormField;

/// per-field error messages, an empty string means no error
///
/// Always holds an entry for each of the four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FormField, String>")]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl Default for ErrorMap {
    fn default() -> Self {
        Self(FormField::ALL.iter().map(|f| (*f, String::new())).collect())
    }
}

/// fields absent from the map read as having no error
impl From<BTreeMap<FormField, String>> for ErrorMap {
    fn from(entries: BTreeMap<FormField, String>) -> Self {
        let mut errors = Self::default();
        errors.0.extend(entries);
        errors
    }
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.insert(field, String::new());
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn has_error(&self, field: FormField) -> bool {
        !self.get(field).is_empty()
    }

    /// true when no field carries a message
    pub fn is_valid(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// fields carrying a message, in form order
    pub fn fields_with_errors(&self) -> Vec<FormField> {
        self.0
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub(crate) fn describe_missing(&self) -> String {
        self.fields_with_errors()
            .iter()
            .map(FormField::key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// required-field validator
#[derive(Debug, Clone)]
pub struct Validator {
    required_message: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            required_message: REQUIRED_FIELD_MESSAGE.to_string(),
        }
    }
}

impl Validator {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            required_message: config.required_field_message.clone(),
        }
    }

    /// check every field, flagging the ones that are unset or zero
    pub fn validate(&self, input: &MortgageInput) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in FormField::ALL {
            if input.is_filled(field) {
                errors.clear(field);
            } else {
                errors.set(field, self.required_message.as_str());
            }
        }

        if !errors.is_valid() {
            debug!("validation failed for fields: {}", errors.describe_missing());
        }
        errors
    }

    /// validate and hand back the complete record
    pub fn validate_terms(&self, input: &MortgageInput) -> Result<MortgageTerms, ErrorMap> {
        let errors = self.validate(input);

        match (input.amount, input.term_years, input.interest_rate, input.mortgage_type) {
            (Some(amount), Some(term_years), Some(interest_rate), Some(mortgage_type)) if errors.is_valid() => {
                Ok(MortgageTerms::new(amount, term_years, interest_rate, mortgage_type))
            }
            _ => Err(errors),
        }
    }
}

/// validate with the default required-field message
pub fn validate(input: &MortgageInput) -> ErrorMap {
    Validator::default().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::MortgageType;
    use rust_decimal_macros::dec;
    use test_log::test;

    fn complete_input() -> MortgageInput {
        MortgageInput::new()
            .amount(Money::from_major(200_000))
            .term_years(25)
            .interest_rate(Rate::from_percentage(dec!(5)))
            .mortgage_type(MortgageType::Repayment)
    }

    #[test]
    fn test_complete_input_is_valid() {
        let errors = validate(&complete_input());
        assert!(errors.is_valid());
        for field in FormField::ALL {
            assert_eq!(errors.get(field), "");
        }
    }

    #[test]
    fn test_empty_input_flags_every_field() {
        let errors = validate(&MortgageInput::new());
        assert!(!errors.is_valid());
        assert_eq!(errors.fields_with_errors(), FormField::ALL.to_vec());
        for field in FormField::ALL {
            assert_eq!(errors.get(field), "This field is required!");
        }
    }

    #[test]
    fn test_single_missing_field_flags_only_that_field() {
        for missing in FormField::ALL {
            let mut input = complete_input();
            match missing {
                FormField::Amount => input.amount = None,
                FormField::Term => input.term_years = None,
                FormField::InterestRate => input.interest_rate = None,
                FormField::Type => input.mortgage_type = None,
            }

            let errors = validate(&input);
            assert_eq!(errors.fields_with_errors(), vec![missing]);
            for field in FormField::ALL.into_iter().filter(|f| *f != missing) {
                assert_eq!(errors.get(field), "");
            }
        }
    }

    #[test]
    fn test_zero_values_are_missing() {
        let input = MortgageInput::new()
            .amount(Money::ZERO)
            .term_years(0)
            .interest_rate(Rate::ZERO)
            .mortgage_type(MortgageType::InterestOnly);

        let errors = validate(&input);
        assert_eq!(
            errors.fields_with_errors(),
            vec![FormField::Amount, FormField::Term, FormField::InterestRate]
        );
    }

    #[test]
    fn test_map_always_has_four_entries() {
        assert_eq!(validate(&MortgageInput::new()).iter().count(), 4);
        assert_eq!(validate(&complete_input()).iter().count(), 4);
    }

    #[test]
    fn test_validate_terms() {
        let terms = Validator::default().validate_terms(&complete_input()).unwrap();
        assert_eq!(terms.term_years, 25);
        assert_eq!(terms.mortgage_type, MortgageType::Repayment);

        let mut input = complete_input();
        input.term_years = Some(0);
        let errors = Validator::default().validate_terms(&input).unwrap_err();
        assert_eq!(errors.fields_with_errors(), vec![FormField::Term]);
    }

    #[test]
    fn test_custom_required_message() {
        let config = CalculatorConfig {
            required_field_message: "Required".to_string(),
            ..CalculatorConfig::default()
        };
        let errors = Validator::new(&config).validate(&MortgageInput::new());
        assert_eq!(errors.get(FormField::Amount), "Required");
    }

    #[test]
    fn test_error_map_serializes_by_field_key() {
        let mut errors = ErrorMap::new();
        errors.set(FormField::Term, "This field is required!");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["mortgage_term"], "This field is required!");
        assert_eq!(json["mortgage_amount"], "");
    }

    #[test]
    fn test_partial_error_map_fills_missing_fields() {
        let errors: ErrorMap =
            serde_json::from_str(r#"{"mortgage_term":"This field is required!"}"#).unwrap();
        assert_eq!(errors.iter().count(), 4);
        assert_eq!(errors.fields_with_errors(), vec![FormField::Term]);
        assert_eq!(errors.get(FormField::Amount), "");

        let empty: ErrorMap = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ErrorMap::new());
    }
}
