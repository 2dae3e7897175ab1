//! Monetary amount type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::{CalculationContext, Currency};
use crate::error::{FincalcError, FincalcResult};

/// A monetary amount: a decimal value paired with a currency.
///
/// Amounts are never mutated in place; every operation returns a new amount
/// in the same currency. Cross-currency addition and subtraction fail with
/// `FincalcError::CurrencyMismatch`, and overflow surfaces as
/// `FincalcError::Overflow` rather than wrapping.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let payment = Money::new(dec!(1000), Currency::USD);
/// let doubled = payment.multiply(dec!(2))?;
/// assert_eq!(doubled.value(), dec!(2000));
/// assert_eq!(doubled.currency(), Currency::USD);
/// # Ok::<(), fincalc_core::FincalcError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Numeric value of the amount
    value: Decimal,
    /// Currency of the amount
    currency: Currency,
}

impl Money {
    /// Creates a new amount.
    #[must_use]
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            value: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if both amounts share a currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::CurrencyMismatch` for differing currencies and
    /// `FincalcError::Overflow` if the sum is not representable.
    pub fn add(&self, other: &Self) -> FincalcResult<Self> {
        if !self.same_currency(other) {
            return Err(FincalcError::currency_mismatch(self.currency, other.currency));
        }
        let sum = self
            .value
            .checked_add(other.value)
            .ok_or_else(|| FincalcError::overflow("add", self.value))?;
        Ok(Self::new(sum, self.currency))
    }

    /// Subtracts another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::CurrencyMismatch` for differing currencies and
    /// `FincalcError::Overflow` if the difference is not representable.
    pub fn subtract(&self, other: &Self) -> FincalcResult<Self> {
        if !self.same_currency(other) {
            return Err(FincalcError::currency_mismatch(self.currency, other.currency));
        }
        let diff = self
            .value
            .checked_sub(other.value)
            .ok_or_else(|| FincalcError::overflow("subtract", self.value))?;
        Ok(Self::new(diff, self.currency))
    }

    /// Multiplies by a dimensionless factor.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if the product is not representable.
    pub fn multiply(&self, factor: Decimal) -> FincalcResult<Self> {
        let product = self
            .value
            .checked_mul(factor)
            .ok_or_else(|| FincalcError::overflow("multiply", self.value))?;
        Ok(Self::new(product, self.currency))
    }

    /// Divides by a dimensionless divisor, rounding under the context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::DivisionByZero` for a zero divisor and
    /// `FincalcError::Overflow` if the quotient is not representable.
    pub fn divide(&self, divisor: Decimal, ctx: &CalculationContext) -> FincalcResult<Self> {
        let quotient = ctx.div(self.value, divisor)?;
        Ok(Self::new(quotient, self.currency))
    }

    /// Rounds the value to the context's precision.
    #[must_use]
    pub fn round(&self, ctx: &CalculationContext) -> Self {
        Self::new(ctx.round(self.value), self.currency)
    }

    /// Rounds the value to the currency's standard number of decimal places.
    #[must_use]
    pub fn round_to_currency(&self) -> Self {
        Self::new(
            self.value.round_dp(self.currency.decimal_places()),
            self.currency,
        )
    }

    /// Returns true if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            None // Can't compare amounts in different currencies
        } else {
            self.value.partial_cmp(&other.value)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_creation() {
        let amount = Money::new(dec!(1000), Currency::USD);
        assert_eq!(amount.value(), dec!(1000));
        assert_eq!(amount.currency(), Currency::USD);
    }

    #[test]
    fn test_zero() {
        let amount = Money::zero(Currency::EUR);
        assert!(amount.is_zero());
        assert_eq!(amount.currency(), Currency::EUR);
    }

    #[test]
    fn test_add_same_currency() {
        let a = Money::new(dec!(100.25), Currency::USD);
        let b = Money::new(dec!(49.75), Currency::USD);
        assert_eq!(a.add(&b).unwrap(), Money::new(dec!(150), Currency::USD));
    }

    #[test]
    fn test_add_currency_mismatch() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(100), Currency::EUR);
        assert!(matches!(
            a.add(&b),
            Err(FincalcError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_subtract() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(40), Currency::USD);
        assert_eq!(
            a.subtract(&b).unwrap(),
            Money::new(dec!(60), Currency::USD)
        );
    }

    #[test]
    fn test_multiply_preserves_currency() {
        let amount = Money::new(dec!(1000), Currency::GBP);
        let result = amount.multiply(dec!(1.05)).unwrap();
        assert_eq!(result.value(), dec!(1050));
        assert_eq!(result.currency(), Currency::GBP);
    }

    #[test]
    fn test_multiply_overflow() {
        let amount = Money::new(Decimal::MAX, Currency::USD);
        assert!(matches!(
            amount.multiply(dec!(2)),
            Err(FincalcError::Overflow { .. })
        ));
    }

    #[test]
    fn test_divide_under_context() {
        let ctx = CalculationContext::default();
        let amount = Money::new(dec!(1000), Currency::USD);
        let result = amount.divide(dec!(3), &ctx).unwrap();
        assert_eq!(result.value(), dec!(333.3333333333333333));
    }

    #[test]
    fn test_divide_by_zero() {
        let ctx = CalculationContext::default();
        let amount = Money::new(dec!(1000), Currency::USD);
        assert!(matches!(
            amount.divide(Decimal::ZERO, &ctx),
            Err(FincalcError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_round_to_currency() {
        let usd = Money::new(dec!(12.3456), Currency::USD);
        assert_eq!(usd.round_to_currency().value(), dec!(12.35));

        let jpy = Money::new(dec!(12.3456), Currency::JPY);
        assert_eq!(jpy.round_to_currency().value(), dec!(12));
    }

    #[test]
    fn test_comparison() {
        let a = Money::new(dec!(100), Currency::USD);
        let b = Money::new(dec!(200), Currency::USD);
        let c = Money::new(dec!(100), Currency::EUR);

        assert!(a < b);
        assert!(a.partial_cmp(&c).is_none()); // Different currencies
    }

    #[test]
    fn test_display() {
        let amount = Money::new(dec!(1234.56), Currency::USD);
        assert_eq!(format!("{}", amount), "1234.56 USD");
    }

    #[test]
    fn test_serde() {
        let amount = Money::new(dec!(1234.56), Currency::USD);
        let json = serde_json::to_string(&amount).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, parsed);
    }
}
