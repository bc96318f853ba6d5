/// json state - inspect the form as json between steps
use chrono::{TimeZone, Utc};
use mortgage_calculator_rs::{
    CalculatorConfig, Money, MortgageForm, MortgageInput, MortgageType, Rate, SafeTimeProvider,
    TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ));

    let config = CalculatorConfig::from_json(r#"{ "currency_symbol": "€" }"#)?;
    let input = MortgageInput::new()
        .amount(Money::from_major(180_000))
        .term_years(20)
        .interest_rate(Rate::from_percentage(dec!(3.9)))
        .mortgage_type(MortgageType::Repayment);

    let mut form = MortgageForm::builder().config(config).input(input).build()?;

    println!("=== before submit ===");
    println!("{}", form.json());

    form.submit(&time)?;
    println!("\n=== after submit ===");
    println!("{}", form.json());

    println!("\n=== events ===");
    println!("{}", serde_json::to_string_pretty(form.events.events())?);

    Ok(())
}
