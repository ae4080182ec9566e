//! # ratekit_core: Numerical Foundation for Interest Rate Modelling
//!
//! Foundation layer of the ratekit workspace, providing:
//! - Discount curve abstractions and finite-difference curve calculus
//!   (`market_data`)
//! - Natural cubic spline interpolation (`math::interpolators`)
//! - Brent root-finding and Levenberg-Marquardt least squares
//!   (`math::solvers`)
//! - Calibration and risk-factor model traits (`traits`)
//! - Error types: `SolverError`, `PricingError`, `CalibrationError`
//!   (`types`) and `CurveError` (`market_data`)
//!
//! This crate has no dependency on other ratekit_* crates and a minimal
//! external footprint (num-traits, thiserror, optional serde).
//!
//! ## Usage Examples
//!
//! ```rust
//! use ratekit_core::market_data::curves::{DiscountCurve, FlatCurve};
//! use ratekit_core::market_data::curves::instantaneous_forward_rate;
//!
//! let curve = FlatCurve::new(0.05);
//!
//! // P(0, 2) = exp(-0.05 * 2)
//! let price = curve.bond_price(2.0).unwrap();
//! assert!((price - (-0.1_f64).exp()).abs() < 1e-12);
//!
//! // Flat curve: instantaneous forward rate equals the flat rate
//! let fwd = instantaneous_forward_rate(&curve, 1.0).unwrap();
//! assert!((fwd - 0.05).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error and configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod traits;
pub mod types;
