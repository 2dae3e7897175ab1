//! # Fincalc Formulas
//!
//! Closed-form time-value-of-money operators for the Fincalc library.
//!
//! Every operator in the catalog has the same shape: it is configured by one
//! [`RateAndPeriods`](fincalc_core::RateAndPeriods) bundle, applied to one
//! [`Money`](fincalc_core::Money) amount, and evaluates its intermediate
//! divisions and powers under a shared
//! [`CalculationContext`](fincalc_core::CalculationContext) so that composed
//! calculations stay reproducible.
//!
//! - **Compounding**: `FutureValue`, `PresentValue`
//! - **Annuities**: `FutureValueOfAnnuity`, `PresentValueOfAnnuity` and
//!   their annuity-due variants
//! - **Growth**: `FutureValueOfGrowingAnnuity`
//!
//! Each operator offers three equivalent entry points: the
//! [`MonetaryOperator`](fincalc_core::MonetaryOperator) `apply` on a
//! configured instance, an associated `calculate` under the default context,
//! and `calculate_with` taking an explicit context.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//! use fincalc_formulas::FutureValueOfAnnuity;
//! use rust_decimal_macros::dec;
//!
//! let params = RateAndPeriods::of(Rate::of(dec!(0.05)), 10)?;
//! let payment = Money::new(dec!(1000), Currency::USD);
//!
//! // Static entry point
//! let fv = FutureValueOfAnnuity::calculate(&payment, params)?;
//!
//! // Operator instance, same result
//! let op = FutureValueOfAnnuity::of(params);
//! assert_eq!(op.apply(&payment)?, fv);
//! # Ok::<(), FincalcError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod annuity;
pub mod compounding;
pub mod growth;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuity::{
        FutureValueOfAnnuity, FutureValueOfAnnuityDue, PresentValueOfAnnuity,
        PresentValueOfAnnuityDue,
    };
    pub use crate::compounding::{FutureValue, PresentValue};
    pub use crate::growth::FutureValueOfGrowingAnnuity;
    pub use fincalc_core::prelude::*;
}

// Re-export the catalog at crate root
pub use annuity::{
    FutureValueOfAnnuity, FutureValueOfAnnuityDue, PresentValueOfAnnuity, PresentValueOfAnnuityDue,
};
pub use compounding::{FutureValue, PresentValue};
pub use growth::FutureValueOfGrowingAnnuity;
