//! Rate-and-periods parameter bundle for compounding formulas.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rate;
use crate::error::{FincalcError, FincalcResult};

/// An immutable pairing of a [`Rate`] with a period count.
///
/// Every compounding formula is configured by one of these bundles. The
/// period count is validated at construction: a zero-period annuity is not
/// meaningful and is rejected.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::{Rate, RateAndPeriods};
/// use rust_decimal_macros::dec;
///
/// let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10)?;
/// assert_eq!(params.periods(), 10);
/// # Ok::<(), fincalc_core::FincalcError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateAndPeriods {
    /// Per-period rate
    rate: Rate,
    /// Number of periods, always >= 1
    periods: u32,
}

impl RateAndPeriods {
    /// Creates a bundle from a rate and a period count.
    ///
    /// # Errors
    ///
    /// Returns `FincalcError::InvalidPeriods` if `periods` is zero.
    pub fn of(rate: Rate, periods: u32) -> FincalcResult<Self> {
        if periods == 0 {
            return Err(FincalcError::invalid_periods(
                periods,
                "periods must be >= 1",
            ));
        }
        Ok(Self { rate, periods })
    }

    /// Returns the per-period rate.
    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns the period count.
    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }
}

impl fmt::Display for RateAndPeriods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {} periods", self.rate, self.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_construction() {
        let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10).unwrap();
        assert_eq!(params.rate(), Rate::of(dec!(0.05)));
        assert_eq!(params.periods(), 10);
    }

    #[test]
    fn test_zero_periods_rejected() {
        let err = RateAndPeriods::of(Rate::of(dec!(0.05)), 0);
        assert!(matches!(err, Err(FincalcError::InvalidPeriods { .. })));
    }

    #[test]
    fn test_single_period_allowed() {
        assert!(RateAndPeriods::of(Rate::zero(), 1).is_ok());
    }

    #[test]
    fn test_display() {
        let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10).unwrap();
        assert_eq!(format!("{}", params), "5.00% over 10 periods");
    }

    #[test]
    fn test_serde() {
        let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let parsed: RateAndPeriods = serde_json::from_str(&json).unwrap();
        assert_eq!(params, parsed);
    }

    proptest! {
        #[test]
        fn prop_valid_periods_roundtrip(mantissa in -1_000_000i64..1_000_000, periods in 1u32..600) {
            let rate = Rate::of(Decimal::new(mantissa, 6));
            let params = RateAndPeriods::of(rate, periods).unwrap();
            prop_assert_eq!(params.rate(), rate);
            prop_assert_eq!(params.periods(), periods);
        }

        #[test]
        fn prop_zero_periods_always_rejected(mantissa in -1_000_000i64..1_000_000) {
            let rate = Rate::of(Decimal::new(mantissa, 6));
            prop_assert!(RateAndPeriods::of(rate, 0).is_err());
        }
    }
}
