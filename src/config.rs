use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};

/// message shown beneath an empty required field
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required!";

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// installments per year, used for both the rate and the payment count
    pub payments_per_year: u32,
    /// fractional digits kept on displayed results
    pub decimal_places: u32,
    pub required_field_message: String,
    pub currency_symbol: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            payments_per_year: 12,
            decimal_places: 2,
            required_field_message: REQUIRED_FIELD_MESSAGE.to_string(),
            currency_symbol: "£".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// same rules, different currency symbol
    pub fn with_currency(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.payments_per_year == 0 {
            return Err(CalculatorError::InvalidConfiguration {
                message: "payments_per_year must be at least 1".to_string(),
            });
        }

        if self.decimal_places > 8 {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("decimal_places {} exceeds 8", self.decimal_places),
            });
        }

        if self.required_field_message.trim().is_empty() {
            return Err(CalculatorError::InvalidConfiguration {
                message: "required_field_message must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// load from a json document, falling back to defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;

        let mut merged = serde_json::to_value(Self::default()).map_err(|e| {
            CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;

        match (merged.as_object_mut(), value.as_object()) {
            (Some(base), Some(overrides)) => {
                for (key, v) in overrides {
                    base.insert(key.clone(), v.clone());
                }
            }
            _ => {
                return Err(CalculatorError::InvalidConfiguration {
                    message: "configuration must be a json object".to_string(),
                });
            }
        }

        let config: Self = serde_json::from_value(merged).map_err(|e| {
            CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }
}
