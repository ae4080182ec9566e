//! Pillar-based interpolated discount curve.

use super::DiscountCurve;
use crate::market_data::error::CurveError;
use crate::math::interpolators::{CubicSpline, Interpolator};

/// Discount curve built from (maturity, price) pillars.
///
/// Bond prices between pillars come from a natural cubic spline; outside the
/// pillar range, the boundary segment polynomial extrapolates. The curve is
/// anchored at P(0, 0) = 1: if the first pillar has a positive maturity, a
/// (0, 1) pillar is prepended.
///
/// Extrapolation matters here because the forward-rate calculus probes the
/// curve at t ± 1e-5, which steps just outside the pillar range at the ends.
///
/// # Example
///
/// ```
/// use ratekit_core::market_data::curves::{DiscountCurve, InterpolatedDiscountCurve};
///
/// let maturities = [1.0, 2.0, 5.0, 10.0];
/// let prices = [0.951, 0.905, 0.779, 0.607];
///
/// let curve = InterpolatedDiscountCurve::new(&maturities, &prices).unwrap();
/// assert!((curve.bond_price(0.0).unwrap() - 1.0).abs() < 1e-12);
/// assert!((curve.bond_price(2.0).unwrap() - 0.905).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedDiscountCurve {
    spline: CubicSpline<f64>,
}

impl InterpolatedDiscountCurve {
    /// Construct a curve from maturity and price pillars.
    ///
    /// Requires at least two pillars with strictly increasing, non-negative
    /// maturities and strictly positive prices.
    ///
    /// # Returns
    ///
    /// * `Ok(InterpolatedDiscountCurve)` - Successfully constructed curve
    /// * `Err(CurveError::InsufficientData)` - Fewer than 2 pillars
    /// * `Err(CurveError::InvalidMaturity)` - Negative or non-increasing
    ///   maturities
    /// * `Err(CurveError::NonPositivePrice)` - Pillar price <= 0
    pub fn new(maturities: &[f64], prices: &[f64]) -> Result<Self, CurveError> {
        if maturities.len() < 2 || prices.len() < 2 {
            return Err(CurveError::InsufficientData {
                got: maturities.len().min(prices.len()),
                need: 2,
            });
        }

        let mut prev = f64::NEG_INFINITY;
        for &t in maturities {
            if t < 0.0 || t <= prev {
                return Err(CurveError::InvalidMaturity { t });
            }
            prev = t;
        }
        for (&t, &price) in maturities.iter().zip(prices) {
            if price <= 0.0 || !price.is_finite() {
                return Err(CurveError::NonPositivePrice { t, price });
            }
        }

        // Anchor at P(0, 0) = 1
        let spline = if maturities[0] > 0.0 {
            let mut ts = Vec::with_capacity(maturities.len() + 1);
            let mut ps = Vec::with_capacity(prices.len() + 1);
            ts.push(0.0);
            ps.push(1.0);
            ts.extend_from_slice(maturities);
            ps.extend_from_slice(prices);
            CubicSpline::extrapolating(&ts, &ps)?
        } else {
            CubicSpline::extrapolating(maturities, prices)?
        };

        Ok(Self { spline })
    }

    /// Last pillar maturity.
    pub fn max_maturity(&self) -> f64 {
        self.spline.domain().1
    }
}

impl DiscountCurve for InterpolatedDiscountCurve {
    fn bond_price(&self, t: f64) -> Result<f64, CurveError> {
        if t < 0.0 {
            return Err(CurveError::InvalidMaturity { t });
        }
        let price = self.spline.interpolate(t)?;
        if price <= 0.0 {
            return Err(CurveError::NonPositivePrice { t, price });
        }
        Ok(price)
    }
}
