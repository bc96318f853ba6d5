/// serialization support for the form and its results
use serde::{Deserialize, Serialize};

use crate::calculator::RepaymentResult;
use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::input::MortgageInput;
use crate::types::{MortgageType, SubmissionId};
use crate::validation::ErrorMap;

use super::{MortgageForm, ResultPanel};

/// serializable view of the whole form
#[derive(Debug, Serialize, Deserialize)]
pub struct FormView {
    pub input: MortgageInput,
    pub errors: ErrorMap,
    pub is_valid: bool,
    pub result: ResultPanelView,
    pub last_submission_id: Option<SubmissionId>,
    pub event_count: usize,
}

/// what the results panel renders
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum ResultPanelView {
    Placeholder { heading: String, message: String },
    Repayment(ResultView),
    Unsupported { mortgage_type: MortgageType, message: String },
}

/// repayment figures with display strings
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultView {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub payment_count: u32,
    pub monthly_display: String,
    pub total_display: String,
}

impl ResultView {
    pub fn from_result(result: &RepaymentResult, config: &CalculatorConfig) -> Self {
        let symbol = config.currency_symbol.as_str();
        ResultView {
            monthly_payment: result.monthly_payment,
            total_payment: result.total_payment,
            total_interest: result.total_interest(),
            payment_count: result.payment_count,
            monthly_display: result.monthly_payment.format_currency(symbol),
            total_display: result.total_payment.format_currency(symbol),
        }
    }
}

impl ResultPanelView {
    pub fn from_panel(panel: &ResultPanel, config: &CalculatorConfig) -> Self {
        match panel {
            ResultPanel::Placeholder => ResultPanelView::Placeholder {
                heading: "Results Shown Here".to_string(),
                message: "Complete the form and click \"Calculate Repayment\" to see what your monthly repayment would be.".to_string(),
            },
            ResultPanel::Repayment(result) => {
                ResultPanelView::Repayment(ResultView::from_result(result, config))
            }
            ResultPanel::Unsupported(mortgage_type) => ResultPanelView::Unsupported {
                mortgage_type: *mortgage_type,
                message: format!("{} calculations are not yet supported.", mortgage_type),
            },
        }
    }
}

impl FormView {
    pub fn from_form(form: &MortgageForm) -> Self {
        FormView {
            input: form.input().clone(),
            errors: form.errors().clone(),
            is_valid: form.errors().is_valid(),
            result: ResultPanelView::from_panel(form.result_panel(), form.config()),
            last_submission_id: form.last_submission_id(),
            event_count: form.events.events().len(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
