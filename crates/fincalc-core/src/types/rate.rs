//! Rate type for per-period growth and discount factors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FincalcError, FincalcResult};

/// A dimensionless per-period fractional rate.
///
/// Rates are expressed as decimal fractions (0.05 = 5% per period). The type
/// places no sign restriction; individual formulas document how they treat
/// zero and negative rates. A `Decimal` is always finite, so construction
/// cannot fail.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::Rate;
/// use rust_decimal_macros::dec;
///
/// let rate = Rate::of(dec!(0.05));
/// assert_eq!(rate.get(), dec!(0.05));
/// assert_eq!(Rate::from_percentage(dec!(5)), rate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from a decimal fraction (0.05 = 5%).
    #[must_use]
    pub fn of(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a rate from a percentage value (5 = 5%).
    #[must_use]
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / Decimal::ONE_HUNDRED)
    }

    /// Creates a rate from basis points (500 = 5%).
    #[must_use]
    pub fn from_bps(bps: i32) -> Self {
        Self(Decimal::from(bps) / Decimal::from(10_000))
    }

    /// A zero rate.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the rate as a decimal fraction.
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage.
    ///
    /// Saturates at the representable bound for rates within a factor of
    /// one hundred of it.
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.0.saturating_mul(Decimal::ONE_HUNDRED)
    }

    /// Returns true if the rate is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the per-period growth factor `1 + r`.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::Overflow` if the factor is not representable.
    /// The rate type places no domain restriction, so a rate at the edge of
    /// the decimal range has no room left for the added one.
    pub fn growth_factor(&self) -> FincalcResult<Decimal> {
        Decimal::ONE
            .checked_add(self.0)
            .ok_or_else(|| FincalcError::overflow("growth_factor", self.0))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}
