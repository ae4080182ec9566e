//! Flat discount curve implementation.

use super::DiscountCurve;
use crate::market_data::error::CurveError;

/// Discount curve with a constant continuously compounded rate.
///
/// Useful for prototyping, testing, and flat term-structure scenarios.
///
/// # Example
///
/// ```
/// use ratekit_core::market_data::curves::{DiscountCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05);
///
/// // P(0, 1) = exp(-0.05) ≈ 0.9512
/// let price = curve.bond_price(1.0).unwrap();
/// assert!((price - 0.951229).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve {
    /// The constant interest rate.
    rate: f64,
}

impl FlatCurve {
    /// Construct a flat curve with the given constant rate.
    #[inline]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscountCurve for FlatCurve {
    /// P(0, t) = exp(-r·t).
    fn bond_price(&self, t: f64) -> Result<f64, CurveError> {
        if t < 0.0 {
            return Err(CurveError::InvalidMaturity { t });
        }
        Ok((-self.rate * t).exp())
    }
}
