//! Core traits for the Fincalc library.
//!
//! This module defines the fundamental abstraction shared by every formula:
//!
//! - [`MonetaryOperator`]: Trait for configured operators that transform one
//!   monetary amount into another

use crate::error::FincalcResult;
use crate::types::Money;

/// Trait for operators that transform a monetary amount.
///
/// An operator is fully configured at construction and immutable thereafter.
/// `apply` is pure: it has no ordering dependency on prior calls and returns
/// the same output for the same input and configuration. Implementations
/// must preserve the input's currency.
pub trait MonetaryOperator: Send + Sync {
    /// Applies the operator to an amount, producing a new amount.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying arithmetic is undefined for the
    /// configured parameters (for example a division that has no finite
    /// result) or when a value is not representable.
    fn apply(&self, amount: &Money) -> FincalcResult<Money>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CalculationContext, Currency};
    use rust_decimal_macros::dec;

    struct Half {
        ctx: CalculationContext,
    }

    impl MonetaryOperator for Half {
        fn apply(&self, amount: &Money) -> FincalcResult<Money> {
            amount.divide(dec!(2), &self.ctx)
        }
    }

    #[test]
    fn test_operator_object_safety() {
        let op: Box<dyn MonetaryOperator> = Box::new(Half {
            ctx: CalculationContext::default(),
        });
        let amount = Money::new(dec!(10), Currency::USD);
        let result = op.apply(&amount).unwrap();
        assert_eq!(result.value(), dec!(5));
        assert_eq!(result.currency(), Currency::USD);
    }
}
