//! The Hull-White parameter bundle.

use std::sync::Arc;

use ratekit_core::market_data::curves::short_rate_at_origin;
use ratekit_core::market_data::{CurveError, DiscountCurve};
use ratekit_core::types::PricingError;

use super::term_structure::ThetaFunction;

/// A fully specified Hull-White one-factor model: mean reversion `a`,
/// volatility `sigma`, the discount curve it is fitted to, and the
/// implied drift `theta(t)`.
///
/// The struct is the single entry point for analytical pricing; the
/// bond, bond-option and swaption pricers are methods on it. Cloning is
/// cheap because the curve is shared behind an [`Arc`].
#[derive(Debug)]
pub struct HullWhiteModel<C: DiscountCurve> {
    a: f64,
    sigma: f64,
    curve: Arc<C>,
    theta: ThetaFunction<C>,
}

// Manual impl: the curve is shared, so cloning needs no `C: Clone`.
impl<C: DiscountCurve> Clone for HullWhiteModel<C> {
    fn clone(&self) -> Self {
        Self {
            a: self.a,
            sigma: self.sigma,
            curve: Arc::clone(&self.curve),
            theta: self.theta.clone(),
        }
    }
}

impl<C: DiscountCurve> HullWhiteModel<C> {
    /// Builds a model from its parameters and a discount curve.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] when `a` or `sigma` is not
    /// strictly positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use ratekit_core::market_data::FlatCurve;
    /// use ratekit_models::hull_white::HullWhiteModel;
    ///
    /// let model = HullWhiteModel::new(0.1, 0.01, Arc::new(FlatCurve::new(0.03))).unwrap();
    /// assert_eq!(model.a(), 0.1);
    /// ```
    pub fn new(a: f64, sigma: f64, curve: Arc<C>) -> Result<Self, PricingError> {
        let theta = ThetaFunction::new(a, sigma, Arc::clone(&curve))?;
        Ok(Self {
            a,
            sigma,
            curve,
            theta,
        })
    }

    /// Mean-reversion speed.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Short-rate volatility.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The discount curve the model is fitted to.
    pub fn curve(&self) -> &Arc<C> {
        &self.curve
    }

    /// The fitted drift function `theta(t)`.
    pub fn theta(&self) -> &ThetaFunction<C> {
        &self.theta
    }

    /// The short rate at the valuation date, `r(0) = f(0, 0+)`, taken
    /// from the curve by a small forward difference.
    ///
    /// # Errors
    ///
    /// Propagates [`CurveError`] from the curve.
    pub fn short_rate_at_origin(&self) -> Result<f64, CurveError> {
        short_rate_at_origin(self.curve.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ratekit_core::market_data::FlatCurve;

    #[test]
    fn constructor_validates_parameters() {
        let curve = Arc::new(FlatCurve::new(0.03));
        assert!(HullWhiteModel::new(0.1, 0.01, Arc::clone(&curve)).is_ok());
        assert!(HullWhiteModel::new(0.0, 0.01, Arc::clone(&curve)).is_err());
        assert!(HullWhiteModel::new(0.1, -0.01, Arc::clone(&curve)).is_err());
        assert!(HullWhiteModel::new(f64::INFINITY, 0.01, curve).is_err());
    }

    #[test]
    fn origin_short_rate_matches_flat_curve() {
        let model = HullWhiteModel::new(0.1, 0.01, Arc::new(FlatCurve::new(0.045))).unwrap();
        assert_relative_eq!(model.short_rate_at_origin().unwrap(), 0.045, epsilon = 1e-8);
    }

    #[test]
    fn clone_shares_the_curve() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let model = HullWhiteModel::new(0.1, 0.01, Arc::clone(&curve)).unwrap();
        let copy = model.clone();
        assert!(Arc::ptr_eq(copy.curve(), &curve));
    }
}
