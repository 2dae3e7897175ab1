//! # Fincalc Core
//!
//! Core types, traits, and abstractions for the Fincalc formula library.
//!
//! This crate provides the foundational building blocks used throughout
//! Fincalc:
//!
//! - **Types**: Domain-specific types like `Money`, `Currency`, `Rate`,
//!   `RateAndPeriods`
//! - **Numeric Context**: An explicit precision/rounding policy threaded
//!   through every calculation
//! - **Traits**: The `MonetaryOperator` abstraction implemented by each
//!   formula
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: The numeric context is passed by reference,
//!   never held in ambient process state
//! - **Exact Arithmetic**: All values are decimals; errors are surfaced,
//!   never rounded away silently
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let payment = Money::new(dec!(1000), Currency::USD);
//! let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10)?;
//! # Ok::<(), fincalc_core::FincalcError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FincalcError, FincalcResult};
    pub use crate::traits::MonetaryOperator;
    pub use crate::types::{CalculationContext, Currency, Money, Rate, RateAndPeriods};
}

// Re-export commonly used types at crate root
pub use error::{FincalcError, FincalcResult};
pub use traits::MonetaryOperator;
pub use types::{CalculationContext, Currency, Money, Rate, RateAndPeriods};
