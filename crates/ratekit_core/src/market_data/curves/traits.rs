//! Discount curve trait definition.

use crate::market_data::error::CurveError;

/// Maps maturities to zero-coupon bond prices observed today.
///
/// # Contract
///
/// - `bond_price(t)` returns P(0, t), the price today of a unit zero-coupon
///   bond maturing at `t`
/// - P(0, 0) = 1
/// - P(0, t) > 0 for all t >= 0
///
/// Negative maturities are rejected with [`CurveError::InvalidMaturity`].
///
/// # Example
///
/// ```
/// use ratekit_core::market_data::curves::{DiscountCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05);
/// assert!((curve.bond_price(0.0).unwrap() - 1.0).abs() < 1e-12);
/// assert!(curve.bond_price(-1.0).is_err());
/// ```
pub trait DiscountCurve {
    /// Return the zero-coupon bond price P(0, t).
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be >= 0)
    ///
    /// # Returns
    ///
    /// * `Ok(P(0, t))` - Bond price at maturity t
    /// * `Err(CurveError::InvalidMaturity)` - If t < 0
    fn bond_price(&self, t: f64) -> Result<f64, CurveError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// Default implementation derives it from the bond price:
    /// `r(t) = -ln P(0, t) / t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be > 0)
    fn zero_rate(&self, t: f64) -> Result<f64, CurveError> {
        if t <= 0.0 {
            return Err(CurveError::InvalidMaturity { t });
        }
        let price = self.bond_price(t)?;
        if price <= 0.0 {
            return Err(CurveError::NonPositivePrice { t, price });
        }
        Ok(-price.ln() / t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::FlatCurve;

    #[test]
    fn test_zero_rate_default_impl() {
        let curve = FlatCurve::new(0.03);
        assert!((curve.zero_rate(2.0).unwrap() - 0.03).abs() < 1e-12);
        assert!((curve.zero_rate(7.5).unwrap() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rate_rejects_zero_maturity() {
        let curve = FlatCurve::new(0.03);
        assert!(curve.zero_rate(0.0).is_err());
    }
}
