pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod form;
pub mod input;
pub mod types;
pub mod validation;

// re-export key types
pub use calculator::{amortized_payment, calculate, RepaymentCalculator, RepaymentResult};
pub use config::{CalculatorConfig, REQUIRED_FIELD_MESSAGE};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use events::{EventStore, FormEvent};
pub use form::{MortgageForm, MortgageFormBuilder, ResultPanel, SubmissionOutcome};
pub use input::{MortgageInput, MortgageTerms};
pub use types::{FormField, MortgageType, SubmissionId};
pub use validation::{validate, ErrorMap, Validator};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
