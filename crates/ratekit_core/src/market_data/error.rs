//! Curve error types.

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Discount curve operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative time to maturity
/// - `NonPositivePrice`: Curve produced or was given a non-positive price
/// - `Interpolation`: Wrapped interpolation error
/// - `InsufficientData`: Not enough pillars for construction
///
/// # Examples
///
/// ```
/// use ratekit_core::market_data::CurveError;
///
/// let err = CurveError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Non-positive zero-coupon bond price.
    #[error("Non-positive bond price {price} at t = {t}")]
    NonPositivePrice {
        /// Maturity at which the price was observed
        t: f64,
        /// The offending price
        price: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got} pillars, need {need}")]
    InsufficientData {
        /// Number of pillars provided
        got: usize,
        /// Minimum number of pillars required
        need: usize,
    },
}

impl From<CurveError> for PricingError {
    fn from(err: CurveError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
