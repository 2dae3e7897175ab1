//! Domain types for monetary calculations.
//!
//! This module provides type-safe representations of the concepts every
//! formula is built from:
//!
//! - [`Money`]: Monetary amount with currency
//! - [`Currency`]: ISO currency codes
//! - [`Rate`]: Per-period fractional rate
//! - [`RateAndPeriods`]: Validated rate-plus-period-count bundle
//! - [`CalculationContext`]: Precision and rounding policy

mod context;
mod currency;
mod money;
mod rate;
mod rate_and_periods;

pub use context::CalculationContext;
pub use currency::Currency;
pub use money::Money;
pub use rate::Rate;
pub use rate_and_periods::RateAndPeriods;
