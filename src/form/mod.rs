pub mod serialization;

use hourglass_rs::SafeTimeProvider;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::{RepaymentCalculator, RepaymentResult};
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::events::{EventStore, FormEvent};
use crate::input::MortgageInput;
use crate::types::{FormField, MortgageType, SubmissionId};
use crate::validation::{ErrorMap, Validator};

pub use serialization::{FormView, ResultPanelView, ResultView};

/// what the results panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultPanel {
    /// nothing submitted yet, or reset
    #[default]
    Placeholder,
    Repayment(RepaymentResult),
    Unsupported(MortgageType),
}

/// outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Invalid(ErrorMap),
    Calculated(RepaymentResult),
    Unsupported(MortgageType),
}

impl SubmissionOutcome {
    pub fn result(&self) -> Option<&RepaymentResult> {
        match self {
            SubmissionOutcome::Calculated(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, SubmissionOutcome::Invalid(_))
    }
}

/// caller-held state of the calculator form
#[derive(Debug)]
pub struct MortgageForm {
    calculator: RepaymentCalculator,
    validator: Validator,
    input: MortgageInput,
    errors: ErrorMap,
    panel: ResultPanel,
    last_submission: Option<SubmissionId>,
    pub events: EventStore,
}

impl Default for MortgageForm {
    fn default() -> Self {
        Self::from_calculator(RepaymentCalculator::default())
    }
}

impl MortgageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MortgageFormBuilder {
        MortgageFormBuilder::new()
    }

    fn from_calculator(calculator: RepaymentCalculator) -> Self {
        Self {
            validator: Validator::new(calculator.config()),
            calculator,
            input: MortgageInput::default(),
            errors: ErrorMap::new(),
            panel: ResultPanel::Placeholder,
            last_submission: None,
            events: EventStore::new(),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }

    pub fn input(&self) -> &MortgageInput {
        &self.input
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn result_panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// the displayed repayment figures, if any
    pub fn result(&self) -> Option<&RepaymentResult> {
        match &self.panel {
            ResultPanel::Repayment(result) => Some(result),
            _ => None,
        }
    }

    pub fn last_submission_id(&self) -> Option<SubmissionId> {
        self.last_submission
    }

    pub fn set_amount(&mut self, amount: Option<Money>, time: &SafeTimeProvider) {
        self.input.amount = amount;
        self.field_changed(FormField::Amount, time);
    }

    pub fn set_term_years(&mut self, years: Option<u32>, time: &SafeTimeProvider) {
        self.input.term_years = years;
        self.field_changed(FormField::Term, time);
    }

    pub fn set_interest_rate(&mut self, rate: Option<Rate>, time: &SafeTimeProvider) {
        self.input.interest_rate = rate;
        self.field_changed(FormField::InterestRate, time);
    }

    pub fn set_mortgage_type(&mut self, mortgage_type: Option<MortgageType>, time: &SafeTimeProvider) {
        self.input.mortgage_type = mortgage_type;
        self.field_changed(FormField::Type, time);
    }

    /// update a field from the raw text of its input
    pub fn set_field_text(&mut self, field: FormField, text: &str, time: &SafeTimeProvider) {
        self.input.set_text(field, text);
        self.field_changed(field, time);
    }

    // editing a field clears its error straight away
    fn field_changed(&mut self, field: FormField, time: &SafeTimeProvider) {
        self.errors.clear(field);
        self.events.emit(FormEvent::FieldChanged {
            field,
            timestamp: time.now(),
        });
    }

    /// validate the current input and, if complete, calculate repayments
    ///
    /// The results panel is replaced wholesale by every submission.
    pub fn submit(&mut self, time: &SafeTimeProvider) -> Result<SubmissionOutcome> {
        let submission_id = Uuid::new_v4();
        self.last_submission = Some(submission_id);

        let terms = match self.validator.validate_terms(&self.input) {
            Ok(terms) => terms,
            Err(errors) => return Ok(self.reject(submission_id, errors, time)),
        };
        self.errors.clear_all();

        match self.calculator.calculate(&terms) {
            Ok(result) => {
                info!(
                    "submission {} calculated: monthly {}, total {}",
                    submission_id, result.monthly_payment, result.total_payment
                );
                self.panel = ResultPanel::Repayment(result);
                self.events.emit(FormEvent::RepaymentCalculated {
                    submission_id,
                    monthly_payment: result.monthly_payment,
                    total_payment: result.total_payment,
                    timestamp: time.now(),
                });
                Ok(SubmissionOutcome::Calculated(result))
            }
            Err(CalculatorError::UnsupportedMortgageType { mortgage_type }) => {
                self.panel = ResultPanel::Unsupported(mortgage_type);
                self.events.emit(FormEvent::UnsupportedTypeRequested {
                    submission_id,
                    mortgage_type,
                    timestamp: time.now(),
                });
                Ok(SubmissionOutcome::Unsupported(mortgage_type))
            }
            Err(CalculatorError::InvalidInput { field, message }) => {
                let mut errors = ErrorMap::new();
                errors.set(field, message);
                Ok(self.reject(submission_id, errors, time))
            }
            Err(e) => {
                warn!("submission {} failed: {}", submission_id, e);
                self.panel = ResultPanel::Placeholder;
                self.events.emit(FormEvent::CalculationFailed {
                    submission_id,
                    message: e.to_string(),
                    timestamp: time.now(),
                });
                Err(e)
            }
        }
    }

    fn reject(&mut self, submission_id: SubmissionId, errors: ErrorMap, time: &SafeTimeProvider) -> SubmissionOutcome {
        debug!("submission {} rejected: {}", submission_id, errors.describe_missing());
        self.panel = ResultPanel::Placeholder;
        self.errors = errors.clone();
        self.events.emit(FormEvent::SubmissionRejected {
            submission_id,
            invalid_fields: errors.fields_with_errors(),
            timestamp: time.now(),
        });
        SubmissionOutcome::Invalid(errors)
    }

    /// reset inputs, errors and results
    pub fn clear_all(&mut self, time: &SafeTimeProvider) {
        self.input = MortgageInput::default();
        self.errors.clear_all();
        self.panel = ResultPanel::Placeholder;
        self.events.emit(FormEvent::FormCleared {
            timestamp: time.now(),
        });
        debug!("form cleared");
    }

    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        FormView::from_form(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

/// builder for a configured form
#[derive(Debug, Default)]
pub struct MortgageFormBuilder {
    config: Option<CalculatorConfig>,
    input: Option<MortgageInput>,
}

impl MortgageFormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        let mut config = self.config.unwrap_or_default();
        config.currency_symbol = symbol.into();
        self.config = Some(config);
        self
    }

    /// prefill the inputs
    pub fn input(mut self, input: MortgageInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn build(self) -> Result<MortgageForm> {
        let calculator = RepaymentCalculator::new(self.config.unwrap_or_default())?;
        let mut form = MortgageForm::from_calculator(calculator);
        if let Some(input) = self.input {
            form.input = input;
        }
        Ok(form)
    }
}
