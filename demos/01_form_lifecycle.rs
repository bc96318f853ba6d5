/// form lifecycle - edit, submit, fix errors, reset
use mortgage_calculator_rs::{
    FormField, MortgageForm, SafeTimeProvider, SubmissionOutcome, TimeSource,
};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let time = SafeTimeProvider::new(TimeSource::System);
    let mut form = MortgageForm::new();

    // submit with the term left empty
    form.set_field_text(FormField::Amount, "300000", &time);
    form.set_field_text(FormField::InterestRate, "5.25", &time);
    form.set_field_text(FormField::Type, "Repayment", &time);

    if let SubmissionOutcome::Invalid(errors) = form.submit(&time)? {
        for (field, message) in errors.iter().filter(|(_, m)| !m.is_empty()) {
            println!("{}: {}", field.label(), message);
        }
    }

    // fill it in and try again
    form.set_field_text(FormField::Term, "30", &time);
    match form.submit(&time)? {
        SubmissionOutcome::Calculated(result) => {
            let symbol = &form.config().currency_symbol;
            println!("Your monthly repayments: {}", result.monthly_payment.format_currency(symbol));
            println!("Total you'll repay over the term: {}", result.total_payment.format_currency(symbol));
        }
        SubmissionOutcome::Unsupported(ty) => println!("{} is not supported yet", ty),
        SubmissionOutcome::Invalid(errors) => println!("still invalid: {:?}", errors),
    }

    // interest only is recognised but not calculated
    form.set_field_text(FormField::Type, "Interest Only", &time);
    println!("{:?}", form.submit(&time)?);

    form.clear_all(&time);
    println!("events recorded: {}", form.events.events().len());

    Ok(())
}
