//! Numeric context controlling precision and rounding.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::{FincalcError, FincalcResult};

/// Precision and rounding policy for decimal arithmetic.
///
/// Every formula routes its intermediate divisions and powers through one
/// context so that composed calculations stay reproducible. The context is an
/// explicit value passed by reference into each calculation; there is no
/// process-wide ambient state to reconfigure.
///
/// The default policy keeps 16 decimal places and rounds half to even,
/// matching 64-bit decimal conventions.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::CalculationContext;
/// use rust_decimal_macros::dec;
///
/// let ctx = CalculationContext::default();
/// assert_eq!(ctx.div(dec!(1), dec!(3)).unwrap(), dec!(0.3333333333333333));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalculationContext {
    /// Decimal places retained after division and exponentiation
    precision: u32,
    /// Rounding strategy applied at that precision
    rounding: RoundingStrategy,
}

impl CalculationContext {
    /// Default number of decimal places retained.
    pub const DEFAULT_PRECISION: u32 = 16;

    /// Maximum representable scale of the underlying decimal type.
    pub const MAX_PRECISION: u32 = 28;

    /// Creates a context with the given precision and rounding strategy.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::InvalidPrecision` if `precision` exceeds
    /// [`Self::MAX_PRECISION`].
    pub fn new(precision: u32, rounding: RoundingStrategy) -> FincalcResult<Self> {
        if precision > Self::MAX_PRECISION {
            return Err(FincalcError::invalid_precision(
                precision,
                format!("precision must be <= {}", Self::MAX_PRECISION),
            ));
        }
        Ok(Self {
            precision,
            rounding,
        })
    }

    /// Returns the number of decimal places retained.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns the rounding strategy.
    #[must_use]
    pub fn rounding(&self) -> RoundingStrategy {
        self.rounding
    }

    /// Returns the multiplicative identity under this context.
    #[must_use]
    pub fn one(&self) -> Decimal {
        Decimal::ONE
    }

    /// Rounds a value to this context's precision.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.precision, self.rounding)
    }

    /// Multiplies two values, rounding the product under this context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if the product is not representable.
    pub fn mul(&self, left: Decimal, right: Decimal) -> FincalcResult<Decimal> {
        let product = left
            .checked_mul(right)
            .ok_or_else(|| FincalcError::overflow("mul", left))?;
        Ok(self.round(product))
    }

    /// Subtracts `right` from `left`, rounding the difference under this
    /// context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if the difference is not
    /// representable.
    pub fn sub(&self, left: Decimal, right: Decimal) -> FincalcResult<Decimal> {
        let difference = left
            .checked_sub(right)
            .ok_or_else(|| FincalcError::overflow("sub", left))?;
        Ok(self.round(difference))
    }

    /// Divides `numerator` by `denominator`, rounding under this context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::DivisionByZero` for a zero denominator and
    /// `FincalcError::Overflow` if the quotient is not representable.
    pub fn div(&self, numerator: Decimal, denominator: Decimal) -> FincalcResult<Decimal> {
        if denominator.is_zero() {
            return Err(FincalcError::division_by_zero(format!(
                "{numerator} / 0"
            )));
        }
        let quotient = numerator
            .checked_div(denominator)
            .ok_or_else(|| FincalcError::overflow("div", numerator))?;
        Ok(self.round(quotient))
    }

    /// Raises `base` to an integer power, rounding under this context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if the power is not representable.
    pub fn pow(&self, base: Decimal, exponent: u32) -> FincalcResult<Decimal> {
        let raised = base
            .checked_powi(i64::from(exponent))
            .ok_or_else(|| FincalcError::overflow("pow", base))?;
        Ok(self.round(raised))
    }
}

impl Default for CalculationContext {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            rounding: RoundingStrategy::MidpointNearestEven,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_context() {
        let ctx = CalculationContext::default();
        assert_eq!(ctx.precision(), 16);
        assert_eq!(ctx.one(), Decimal::ONE);
    }

    #[test]
    fn test_precision_bound() {
        let ok = CalculationContext::new(28, RoundingStrategy::MidpointNearestEven);
        assert!(ok.is_ok());

        let err = CalculationContext::new(29, RoundingStrategy::MidpointNearestEven);
        assert!(matches!(err, Err(FincalcError::InvalidPrecision { .. })));
    }

    #[test]
    fn test_div_rounds_to_precision() {
        let ctx = CalculationContext::new(4, RoundingStrategy::MidpointNearestEven).unwrap();
        assert_eq!(ctx.div(dec!(2), dec!(3)).unwrap(), dec!(0.6667));
    }

    #[test]
    fn test_sub() {
        let ctx = CalculationContext::default();
        assert_eq!(ctx.sub(dec!(1.1025), Decimal::ONE).unwrap(), dec!(0.1025));
    }

    #[test]
    fn test_sub_overflow() {
        let ctx = CalculationContext::default();
        let err = ctx.sub(Decimal::MIN, Decimal::MAX);
        assert!(matches!(err, Err(FincalcError::Overflow { .. })));
    }

    #[test]
    fn test_div_by_zero() {
        let ctx = CalculationContext::default();
        let err = ctx.div(dec!(1), Decimal::ZERO);
        assert!(matches!(err, Err(FincalcError::DivisionByZero { .. })));
    }

    #[test]
    fn test_pow() {
        let ctx = CalculationContext::default();
        assert_eq!(ctx.pow(dec!(1.05), 2).unwrap(), dec!(1.1025));
        assert_eq!(ctx.pow(dec!(1.05), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_pow_overflow() {
        let ctx = CalculationContext::default();
        let err = ctx.pow(dec!(10), 1000);
        assert!(matches!(err, Err(FincalcError::Overflow { .. })));
    }

    #[test]
    fn test_banker_rounding() {
        let ctx = CalculationContext::new(2, RoundingStrategy::MidpointNearestEven).unwrap();
        // Half to even: 0.125 -> 0.12, 0.135 -> 0.14
        assert_eq!(ctx.round(dec!(0.125)), dec!(0.12));
        assert_eq!(ctx.round(dec!(0.135)), dec!(0.14));
    }
}
