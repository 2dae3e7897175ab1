//! Annuity valuation operators.
//!
//! An annuity is a series of equal periodic payments. The ordinary variants
//! assume the first payment is one period away; the "due" variants assume
//! payment at the start of each period, which scales the ordinary result by
//! one extra period of growth.
//!
//! All variants share one zero-rate policy: with `r = 0` the closed forms
//! degenerate to their limit, `amount * n`, which is returned exactly.

use rust_decimal::Decimal;
use std::fmt;

use fincalc_core::{
    CalculationContext, FincalcResult, MonetaryOperator, Money, RateAndPeriods,
};

/// Future value of an ordinary annuity.
///
/// Computes `amount * ((1 + r)^n - 1) / r`: the value at the end of period
/// `n` of a payment of `amount` made at the end of each period, compounded
/// at rate `r`. The intermediate power and division are rounded under the
/// calculation context.
///
/// A zero rate returns `amount * n` (the r -> 0 limit of the closed form).
///
/// # Example
///
/// ```rust
/// use fincalc_core::prelude::*;
/// use fincalc_formulas::FutureValueOfAnnuity;
/// use rust_decimal_macros::dec;
///
/// let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10)?;
/// let payment = Money::new(dec!(1000), Currency::USD);
/// let fv = FutureValueOfAnnuity::calculate(&payment, params)?;
/// assert_eq!(fv.round_to_currency().value(), dec!(12577.89));
/// # Ok::<(), FincalcError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FutureValueOfAnnuity {
    params: RateAndPeriods,
    ctx: CalculationContext,
}

impl FutureValueOfAnnuity {
    /// Creates an operator using the default calculation context.
    #[must_use]
    pub fn of(params: RateAndPeriods) -> Self {
        Self::with_context(params, CalculationContext::default())
    }

    /// Creates an operator using an explicit calculation context.
    #[must_use]
    pub fn with_context(params: RateAndPeriods, ctx: CalculationContext) -> Self {
        Self { params, ctx }
    }

    /// Returns the configured rate and periods.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.params
    }

    /// Calculates the future value under the default context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if a value is not representable.
    pub fn calculate(amount: &Money, params: RateAndPeriods) -> FincalcResult<Money> {
        Self::calculate_with(amount, params, &CalculationContext::default())
    }

    /// Calculates the future value under an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if a value is not representable.
    pub fn calculate_with(
        amount: &Money,
        params: RateAndPeriods,
        ctx: &CalculationContext,
    ) -> FincalcResult<Money> {
        log::trace!("future value of annuity: {} at {}", amount, params);
        let rate = params.rate();
        if rate.is_zero() {
            return amount.multiply(Decimal::from(params.periods()));
        }
        let compound = ctx.pow(rate.growth_factor()?, params.periods())?;
        let factor = ctx.div(ctx.sub(compound, ctx.one())?, rate.get())?;
        amount.multiply(factor)
    }
}

impl MonetaryOperator for FutureValueOfAnnuity {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, &self.ctx)
    }
}

impl fmt::Display for FutureValueOfAnnuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FutureValueOfAnnuity[{}]", self.params)
    }
}

/// Future value of an annuity due.
///
/// Payments fall at the start of each period, so every payment earns one
/// more period of interest than in the ordinary annuity:
/// `amount * ((1 + r)^n - 1) / r * (1 + r)`.
#[derive(Debug, Clone, Copy)]
pub struct FutureValueOfAnnuityDue {
    params: RateAndPeriods,
    ctx: CalculationContext,
}

impl FutureValueOfAnnuityDue {
    /// Creates an operator using the default calculation context.
    #[must_use]
    pub fn of(params: RateAndPeriods) -> Self {
        Self::with_context(params, CalculationContext::default())
    }

    /// Creates an operator using an explicit calculation context.
    #[must_use]
    pub fn with_context(params: RateAndPeriods, ctx: CalculationContext) -> Self {
        Self { params, ctx }
    }

    /// Returns the configured rate and periods.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.params
    }

    /// Calculates the future value under the default context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if a value is not representable.
    pub fn calculate(amount: &Money, params: RateAndPeriods) -> FincalcResult<Money> {
        Self::calculate_with(amount, params, &CalculationContext::default())
    }

    /// Calculates the future value under an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if a value is not representable.
    pub fn calculate_with(
        amount: &Money,
        params: RateAndPeriods,
        ctx: &CalculationContext,
    ) -> FincalcResult<Money> {
        log::trace!("future value of annuity due: {} at {}", amount, params);
        let ordinary = FutureValueOfAnnuity::calculate_with(amount, params, ctx)?;
        // The zero-rate limit needs no extra growth period
        ordinary.multiply(params.rate().growth_factor()?)
    }
}

impl MonetaryOperator for FutureValueOfAnnuityDue {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, &self.ctx)
    }
}

impl fmt::Display for FutureValueOfAnnuityDue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FutureValueOfAnnuityDue[{}]", self.params)
    }
}

/// Present value of an ordinary annuity.
///
/// Computes `amount * (1 - (1 + r)^-n) / r`: today's value of a payment of
/// `amount` received at the end of each of `n` periods, discounted at rate
/// `r`.
///
/// A zero rate returns `amount * n`; a rate of exactly -100% fails with
/// `FincalcError::DivisionByZero` because the discount factor is zero.
#[derive(Debug, Clone, Copy)]
pub struct PresentValueOfAnnuity {
    params: RateAndPeriods,
    ctx: CalculationContext,
}

impl PresentValueOfAnnuity {
    /// Creates an operator using the default calculation context.
    #[must_use]
    pub fn of(params: RateAndPeriods) -> Self {
        Self::with_context(params, CalculationContext::default())
    }

    /// Creates an operator using an explicit calculation context.
    #[must_use]
    pub fn with_context(params: RateAndPeriods, ctx: CalculationContext) -> Self {
        Self { params, ctx }
    }

    /// Returns the configured rate and periods.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.params
    }

    /// Calculates the present value under the default context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::DivisionByZero` for a rate of -100% and
    /// `FincalcError::Overflow` if a value is not representable.
    pub fn calculate(amount: &Money, params: RateAndPeriods) -> FincalcResult<Money> {
        Self::calculate_with(amount, params, &CalculationContext::default())
    }

    /// Calculates the present value under an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::DivisionByZero` for a rate of -100% and
    /// `FincalcError::Overflow` if a value is not representable.
    pub fn calculate_with(
        amount: &Money,
        params: RateAndPeriods,
        ctx: &CalculationContext,
    ) -> FincalcResult<Money> {
        log::trace!("present value of annuity: {} at {}", amount, params);
        let rate = params.rate();
        if rate.is_zero() {
            return amount.multiply(Decimal::from(params.periods()));
        }
        let compound = ctx.pow(rate.growth_factor()?, params.periods())?;
        let discount = ctx.div(ctx.one(), compound)?;
        let factor = ctx.div(ctx.sub(ctx.one(), discount)?, rate.get())?;
        amount.multiply(factor)
    }
}

impl MonetaryOperator for PresentValueOfAnnuity {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, &self.ctx)
    }
}

impl fmt::Display for PresentValueOfAnnuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresentValueOfAnnuity[{}]", self.params)
    }
}

/// Present value of an annuity due.
///
/// Payments fall at the start of each period:
/// `amount * (1 - (1 + r)^-n) / r * (1 + r)`.
#[derive(Debug, Clone, Copy)]
pub struct PresentValueOfAnnuityDue {
    params: RateAndPeriods,
    ctx: CalculationContext,
}

impl PresentValueOfAnnuityDue {
    /// Creates an operator using the default calculation context.
    #[must_use]
    pub fn of(params: RateAndPeriods) -> Self {
        Self::with_context(params, CalculationContext::default())
    }

    /// Creates an operator using an explicit calculation context.
    #[must_use]
    pub fn with_context(params: RateAndPeriods, ctx: CalculationContext) -> Self {
        Self { params, ctx }
    }

    /// Returns the configured rate and periods.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.params
    }

    /// Calculates the present value under the default context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::DivisionByZero` for a rate of -100% and
    /// `FincalcError::Overflow` if a value is not representable.
    pub fn calculate(amount: &Money, params: RateAndPeriods) -> FincalcResult<Money> {
        Self::calculate_with(amount, params, &CalculationContext::default())
    }

    /// Calculates the present value under an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::DivisionByZero` for a rate of -100% and
    /// `FincalcError::Overflow` if a value is not representable.
    pub fn calculate_with(
        amount: &Money,
        params: RateAndPeriods,
        ctx: &CalculationContext,
    ) -> FincalcResult<Money> {
        log::trace!("present value of annuity due: {} at {}", amount, params);
        let ordinary = PresentValueOfAnnuity::calculate_with(amount, params, ctx)?;
        ordinary.multiply(params.rate().growth_factor()?)
    }
}

impl MonetaryOperator for PresentValueOfAnnuityDue {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, &self.ctx)
    }
}

impl fmt::Display for PresentValueOfAnnuityDue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresentValueOfAnnuityDue[{}]", self.params)
    }
}
