//! Market data structures for interest rate modelling.
//!
//! # Components
//!
//! - [`curves`]: Discount curve trait, implementations, and the
//!   finite-difference curve calculus used for term-structure fitting
//! - [`error`]: Curve error types
//!
//! # Example
//!
//! ```
//! use ratekit_core::market_data::curves::{DiscountCurve, FlatCurve};
//!
//! let curve = FlatCurve::new(0.05);
//! let price = curve.bond_price(1.0).unwrap();
//! assert!((price - 0.951229).abs() < 1e-5);
//! ```

pub mod curves;
pub mod error;

pub use curves::{DiscountCurve, FlatCurve, InterpolatedDiscountCurve};
pub use error::CurveError;
