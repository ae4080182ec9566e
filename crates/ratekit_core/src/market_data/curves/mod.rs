//! Discount curves and curve calculus.
//!
//! This module provides:
//! - [`DiscountCurve`]: Trait mapping maturities to zero-coupon bond prices
//! - [`FlatCurve`]: Constant-rate curve
//! - [`InterpolatedDiscountCurve`]: Pillar-based curve with cubic spline
//!   interpolation and boundary extrapolation
//! - Curve calculus: [`instantaneous_forward_rate`],
//!   [`forward_rate_derivative`], [`short_rate_at_origin`]

mod flat;
mod forward;
mod interpolated;
mod traits;

pub use flat::FlatCurve;
pub use forward::{
    forward_rate_derivative, instantaneous_forward_rate, short_rate_at_origin, FORWARD_RATE_STEP,
};
pub use interpolated::InterpolatedDiscountCurve;
pub use traits::DiscountCurve;
