/// quick start - calculate a repayment mortgage directly
use mortgage_calculator_rs::{calculate, Decimal, Money, MortgageTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // £200,000 over 25 years at 5%
    let terms = MortgageTerms::repayment(Money::from_major(200_000), 25, Decimal::from(5));
    let result = calculate(&terms)?;

    println!("monthly repayment: {}", result.monthly_payment.format_currency("£"));
    println!("total over term:   {}", result.total_payment.format_currency("£"));
    println!("interest paid:     {}", result.total_interest().format_currency("£"));

    Ok(())
}
