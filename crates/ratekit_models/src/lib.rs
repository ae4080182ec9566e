//! Interest-rate model analytics for ratekit.
//!
//! This crate implements the Hull-White one-factor short-rate model:
//!
//! - **Analytical pricing**: zero-coupon bonds, options on zero-coupon
//!   bonds and European swaptions (via Jamshidian decomposition), all in
//!   closed or semi-closed form.
//! - **Term structure fitting**: the drift function `theta(t)` that makes
//!   the model reproduce an observed discount curve exactly.
//! - **Calibration**: recovery of the mean-reversion speed and volatility
//!   from market swaption prices using Levenberg-Marquardt least squares.
//!
//! The numerical machinery (curves, solvers, interpolation) lives in
//! [`ratekit_core`]; this crate layers model semantics on top.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ratekit_core::market_data::FlatCurve;
//! use ratekit_models::hull_white::HullWhiteModel;
//!
//! let curve = Arc::new(FlatCurve::new(0.03));
//! let model = HullWhiteModel::new(0.1, 0.01, curve).unwrap();
//!
//! // Price a zero-coupon bond maturing in 5y, observed at t = 1y with
//! // short rate 3%.
//! let price = model.zero_coupon_bond_price(1.0, 5.0, 0.03).unwrap();
//! assert!(price > 0.0 && price < 1.0);
//! ```

#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analytical;
pub mod hull_white;
