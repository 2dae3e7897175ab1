//! Growing annuity valuation.

use rust_decimal::Decimal;
use std::fmt;

use fincalc_core::{
    CalculationContext, FincalcResult, MonetaryOperator, Money, Rate, RateAndPeriods,
};

/// Future value of a growing annuity.
///
/// Values a series of `n` end-of-period payments that grow at rate `g` per
/// period, with the first payment equal to `amount`, compounded at rate `r`:
///
/// `amount * ((1 + r)^n - (1 + g)^n) / (r - g)`
///
/// When `r = g` the closed form is undefined and the limit is returned
/// instead: `amount * n * (1 + r)^(n - 1)`. A growth rate of zero reduces to
/// the ordinary [`FutureValueOfAnnuity`](crate::FutureValueOfAnnuity).
/// Distinct rates closer together than the context precision leave a zero
/// denominator after rounding and fail with `FincalcError::DivisionByZero`.
///
/// # Example
///
/// ```rust
/// use fincalc_core::prelude::*;
/// use fincalc_formulas::FutureValueOfGrowingAnnuity;
/// use rust_decimal_macros::dec;
///
/// let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 3)?;
/// let payment = Money::new(dec!(100), Currency::USD);
/// let fv = FutureValueOfGrowingAnnuity::calculate(&payment, params, Rate::of(dec!(0.02)))?;
/// assert_eq!(fv.round_to_currency().value(), dec!(321.39));
/// # Ok::<(), FincalcError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FutureValueOfGrowingAnnuity {
    params: RateAndPeriods,
    growth: Rate,
    ctx: CalculationContext,
}

impl FutureValueOfGrowingAnnuity {
    /// Creates an operator using the default calculation context.
    #[must_use]
    pub fn of(params: RateAndPeriods, growth: Rate) -> Self {
        Self::with_context(params, growth, CalculationContext::default())
    }

    /// Creates an operator using an explicit calculation context.
    #[must_use]
    pub fn with_context(params: RateAndPeriods, growth: Rate, ctx: CalculationContext) -> Self {
        Self {
            params,
            growth,
            ctx,
        }
    }

    /// Returns the configured rate and periods.
    #[must_use]
    pub fn rate_and_periods(&self) -> RateAndPeriods {
        self.params
    }

    /// Returns the per-period payment growth rate.
    #[must_use]
    pub fn growth(&self) -> Rate {
        self.growth
    }

    /// Calculates the future value under the default context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if a value is not representable.
    pub fn calculate(
        amount: &Money,
        params: RateAndPeriods,
        growth: Rate,
    ) -> FincalcResult<Money> {
        Self::calculate_with(amount, params, growth, &CalculationContext::default())
    }

    /// Calculates the future value under an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if a value is not representable.
    pub fn calculate_with(
        amount: &Money,
        params: RateAndPeriods,
        growth: Rate,
        ctx: &CalculationContext,
    ) -> FincalcResult<Money> {
        log::trace!(
            "future value of growing annuity: {} at {}, growth {}",
            amount,
            params,
            growth
        );
        let rate = params.rate();
        let periods = params.periods();
        if rate == growth {
            // Limit: every payment compounds to amount * (1 + r)^(n - 1)
            let compound = ctx.pow(rate.growth_factor()?, periods - 1)?;
            let factor = ctx.mul(Decimal::from(periods), compound)?;
            return amount.multiply(factor);
        }
        let compound_rate = ctx.pow(rate.growth_factor()?, periods)?;
        let compound_growth = ctx.pow(growth.growth_factor()?, periods)?;
        let spread = ctx.sub(rate.get(), growth.get())?;
        let factor = ctx.div(ctx.sub(compound_rate, compound_growth)?, spread)?;
        amount.multiply(factor)
    }
}

impl MonetaryOperator for FutureValueOfGrowingAnnuity {
    fn apply(&self, amount: &Money) -> FincalcResult<Money> {
        Self::calculate_with(amount, self.params, self.growth, &self.ctx)
    }
}

impl fmt::Display for FutureValueOfGrowingAnnuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FutureValueOfGrowingAnnuity[{}, growth {}]",
            self.params, self.growth
        )
    }
}
