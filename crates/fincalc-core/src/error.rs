//! Error types for the Fincalc library.
//!
//! This module defines the error types used throughout Fincalc,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Currency;

/// A specialized Result type for Fincalc core operations.
pub type FincalcResult<T> = Result<T, FincalcError>;

/// The main error type for Fincalc core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FincalcError {
    /// Invalid period count for a rate-and-periods bundle.
    #[error("Invalid periods: {periods} - {reason}")]
    InvalidPeriods {
        /// The rejected period count.
        periods: u32,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid precision for a calculation context.
    #[error("Invalid precision: {precision} - {reason}")]
    InvalidPrecision {
        /// The rejected precision.
        precision: u32,
        /// Reason for invalidity.
        reason: String,
    },

    /// Arithmetic between amounts denominated in different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: Currency,
        /// Currency of the right operand.
        right: Currency,
    },

    /// Division by a zero divisor.
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// What was being divided when the zero divisor appeared.
        context: String,
    },

    /// Decimal overflow during multiply, divide, or exponentiation.
    #[error("Arithmetic overflow computing {operation} on {value}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
        /// The operand that triggered the overflow.
        value: Decimal,
    },
}

impl FincalcError {
    /// Creates an invalid periods error.
    #[must_use]
    pub fn invalid_periods(periods: u32, reason: impl Into<String>) -> Self {
        Self::InvalidPeriods {
            periods,
            reason: reason.into(),
        }
    }

    /// Creates an invalid precision error.
    #[must_use]
    pub fn invalid_precision(precision: u32, reason: impl Into<String>) -> Self {
        Self::InvalidPrecision {
            precision,
            reason: reason.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(left: Currency, right: Currency) -> Self {
        Self::CurrencyMismatch { left, right }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>, value: Decimal) -> Self {
        Self::Overflow {
            operation: operation.into(),
            value,
        }
    }
}
