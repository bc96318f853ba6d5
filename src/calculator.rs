use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::input::{MortgageInput, MortgageTerms};
use crate::types::{FormField, MortgageType};
use crate::validation::Validator;

/// repayment figures for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentResult {
    pub principal: Money,
    pub payment_count: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
}

impl RepaymentResult {
    /// interest paid over the whole term
    pub fn total_interest(&self) -> Money {
        (self.total_payment - self.principal).max(Money::ZERO)
    }
}

/// amortizing repayment calculator
#[derive(Debug, Clone, Default)]
pub struct RepaymentCalculator {
    config: CalculatorConfig,
}

impl RepaymentCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// validate raw input, then calculate
    pub fn calculate_input(&self, input: &MortgageInput) -> Result<RepaymentResult> {
        let terms = Validator::new(&self.config)
            .validate_terms(input)
            .map_err(CalculatorError::MissingFields)?;
        self.calculate(&terms)
    }

    /// calculate monthly and total repayment
    ///
    /// The monthly figure is rounded half away from zero, and the total is the
    /// rounded monthly figure times the number of payments, so
    /// `monthly_payment * payment_count == total_payment` holds exactly.
    pub fn calculate(&self, terms: &MortgageTerms) -> Result<RepaymentResult> {
        if terms.mortgage_type == MortgageType::InterestOnly {
            warn!("interest-only calculation requested, not supported");
            return Err(CalculatorError::UnsupportedMortgageType {
                mortgage_type: terms.mortgage_type,
            });
        }

        if !terms.amount.is_positive() {
            return Err(CalculatorError::InvalidInput {
                field: FormField::Amount,
                message: format!("amount must be greater than zero, got {}", terms.amount),
            });
        }

        if terms.term_years == 0 {
            return Err(CalculatorError::InvalidInput {
                field: FormField::Term,
                message: "term must be at least one year".to_string(),
            });
        }

        if terms.interest_rate.is_negative() {
            return Err(CalculatorError::InvalidInput {
                field: FormField::InterestRate,
                message: format!("interest rate must not be negative, got {}", terms.interest_rate),
            });
        }

        let payment_count = terms
            .term_years
            .checked_mul(self.config.payments_per_year)
            .ok_or_else(|| CalculatorError::CalculationError {
                message: format!("term of {} years is too long", terms.term_years),
            })?;

        let exact = amortized_payment(
            terms.amount,
            terms.interest_rate,
            payment_count,
            self.config.payments_per_year,
        )?;

        let monthly_payment = exact.round_dp(self.config.decimal_places);
        let total_payment = monthly_payment
            .checked_mul(Decimal::from(payment_count))
            .ok_or_else(|| CalculatorError::CalculationError {
                message: "total payment overflow".to_string(),
            })?;

        debug!(
            "principal {} over {} payments at {}: monthly {}, total {}",
            terms.amount, payment_count, terms.interest_rate, monthly_payment, total_payment
        );

        Ok(RepaymentResult {
            principal: terms.amount,
            payment_count,
            monthly_payment,
            total_payment,
        })
    }
}

/// calculate with the default configuration
pub fn calculate(terms: &MortgageTerms) -> Result<RepaymentResult> {
    RepaymentCalculator::default().calculate(terms)
}

/// unrounded fixed payment that clears `principal` in `payments` installments
///
/// `payment = P * r / (1 - (1 + r)^-n)` with `r` the periodic rate, which keeps
/// the compounding factor away from the principal. A zero rate degenerates to
/// `P / n`, and a factor too large for `Decimal` leaves the interest-only
/// limit `P * r`.
pub fn amortized_payment(
    principal: Money,
    annual_rate: Rate,
    payments: u32,
    periods_per_year: u32,
) -> Result<Money> {
    if payments == 0 || periods_per_year == 0 {
        return Err(CalculatorError::CalculationError {
            message: "payment count and periods per year must be non-zero".to_string(),
        });
    }

    let r = annual_rate.periodic_rate(periods_per_year).as_decimal();
    if r.is_zero() {
        return Ok(principal / Decimal::from(payments));
    }

    let interest = principal
        .as_decimal()
        .checked_mul(r)
        .ok_or_else(|| CalculatorError::CalculationError {
            message: format!("interest on {} at {} overflowed", principal, annual_rate),
        })?;

    let discount = match (Decimal::ONE + r).checked_powu(u64::from(payments)) {
        Some(compound) => Decimal::ONE / compound,
        None => Decimal::ZERO,
    };
    let denominator = Decimal::ONE - discount;

    // rate too small to register after compounding
    if denominator.is_zero() {
        return Ok(principal / Decimal::from(payments));
    }

    Ok(Money::from_decimal(interest / denominator))
}
