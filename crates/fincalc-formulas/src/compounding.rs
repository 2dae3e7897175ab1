//! Single cash flow compounding and discounting.
//!
//! These operators move one cash flow through time at a fixed per-period
//! rate: [`FutureValue`] compounds it forward, [`PresentValue`] discounts it
//! back.

use std::fmt;

use fincalc_core::{
    CalculationContext, FincalcResult, MonetaryOperator, Money, RateAndPeriods,
};

/// Future value of a single cash flow.
///
/// Computes `amount * (1 + r)^n`: the value of a cash flow after `n` periods
/// of compounding at rate `r`. A zero rate leaves the amount unchanged.
///
/// # Example
///
/// ```rust
/// use fincalc_core::prelude::*;
/// use fincalc_formulas::FutureValue;
/// use rust_decimal_macros::dec;
///
/// let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 2)?;
/// let amount = Money::new(dec!(100), Currency::USD);
/// let fv = FutureValue::calculate(&amount, params)?;
/// assert_eq!(fv.value(), dec!(110.25));
/// # Ok::<(), FincalcError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FutureValue {
    params: RateAndPeriods,
    ctx: CalculationContext,
}

impl FutureValue {
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
    /// Returns `FincalcError::Overflow` if the compound factor or product is
    /// not representable.
    pub fn calculate(amount: &Money, params: RateAndPeriods) -> FincalcResult<Money> {
        Self::calculate_with(amount, params, &CalculationContext::default())
    }

    /// Calculates the future value under an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if the compound factor or product is
    /// not representable.
    pub fn calculate_with(
        amount: &Money,
        params: RateAndPeriods,
        ctx: &CalculationContext,
    ) -> FincalcResult<Money> {
        log::trace!("future value: {} at {}", amount, params);
        let compound = ctx.pow(params.rate().growth_factor()?, params.periods())?;
        amount.multiply(compound)
    }
}

impl MonetaryOperator for FutureValue {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, &self.ctx)
    }
}

impl fmt::Display for FutureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FutureValue[{}]", self.params)
    }
}

/// Present value of a single cash flow.
///
/// Computes `amount / (1 + r)^n`: today's value of a cash flow received
/// after `n` periods, discounted at rate `r`. The division is rounded under
/// the calculation context.
///
/// A rate of exactly -100% makes the discount factor zero and fails with
/// `FincalcError::DivisionByZero`.
#[derive(Debug, Clone, Copy)]
pub struct PresentValue {
    params: RateAndPeriods,
    ctx: CalculationContext,
}

impl PresentValue {
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
        log::trace!("present value: {} at {}", amount, params);
        let compound = ctx.pow(params.rate().growth_factor()?, params.periods())?;
        amount.divide(compound, ctx)
    }
}

impl MonetaryOperator for PresentValue {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, &self.ctx)
    }
}

impl fmt::Display for PresentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresentValue[{}]", self.params)
    }
}
