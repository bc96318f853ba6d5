use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};
use std::str::FromStr;

/// Money type holding an exact decimal amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?))
    }

    /// create from integer amount (pounds, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (pence, cents, etc)
    pub fn from_minor(amount: i64, scale: u32) -> Self {
        Money(Decimal::new(amount, scale))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half away from zero to the given decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// multiply, returning None on overflow
    pub fn checked_mul(self, other: Decimal) -> Option<Self> {
        self.0.checked_mul(other).map(Money)
    }

    /// format for display, e.g. `£1,169.18`
    pub fn format_currency(&self, symbol: &str) -> String {
        let rounded = self.round_dp(2).0.abs();
        let text = format!("{:.2}", rounded);
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.round_dp(2).is_negative() { "-" } else { "" };
        format!("{}{}{}.{}", sign, symbol, grouped, fraction)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(self.0 / other)
    }
}

/// annual nominal interest rate, stored as a fraction (0.05 for 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from a percentage as typed into the form (e.g., 5.25 for 5.25%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / dec!(100))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * dec!(100)).normalize()
    }

    /// periodic rate for the given number of periods per year
    pub fn periodic_rate(&self, periods_per_year: u32) -> Rate {
        Rate(self.0 / Decimal::from(periods_per_year))
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        self.periodic_rate(12)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(Money::from_decimal(dec!(1.005)).round_dp(2), Money::from_decimal(dec!(1.01)));
        assert_eq!(Money::from_decimal(dec!(2.675)).round_dp(2), Money::from_decimal(dec!(2.68)));
        assert_eq!(Money::from_decimal(dec!(-1.005)).round_dp(2), Money::from_decimal(dec!(-1.01)));
        assert_eq!(Money::from_decimal(dec!(1.004)).round_dp(2), Money::from_decimal(dec!(1.00)));
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(Money::from_decimal(dec!(1169.18)).format_currency("£"), "£1,169.18");
        assert_eq!(Money::from_decimal(dec!(350754)).format_currency("£"), "£350,754.00");
        assert_eq!(Money::from_decimal(dec!(999.999)).format_currency("$"), "$1,000.00");
        assert_eq!(Money::from_decimal(dec!(12)).format_currency("£"), "£12.00");
        assert_eq!(Money::from_decimal(dec!(1234567.5)).format_currency("€"), "€1,234,567.50");
        assert_eq!(Money::from_decimal(dec!(-42.1)).format_currency("£"), "-£42.10");
        assert_eq!(Money::ZERO.format_currency("£"), "£0.00");
    }

    #[test]
    fn test_money_parsing() {
        assert_eq!(" 200000 ".parse::<Money>().unwrap(), Money::from_major(200_000));
        assert_eq!(Money::from_minor(116918, 2), Money::from_decimal(dec!(1169.18)));
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percentage(dec!(5.25));
        assert_eq!(rate.as_decimal(), dec!(0.0525));
        assert_eq!(rate.as_percentage(), dec!(5.25));
        assert_eq!(rate.to_string(), "5.25%");

        let monthly = Rate::from_percentage(dec!(12)).monthly_rate();
        assert_eq!(monthly.as_decimal(), dec!(0.01));
    }
}
