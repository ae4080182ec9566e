//! Term-structure fitting: the Hull-White drift function `theta(t)`.

use std::sync::Arc;

use ratekit_core::market_data::curves::{forward_rate_derivative, instantaneous_forward_rate};
use ratekit_core::market_data::{CurveError, DiscountCurve};
use ratekit_core::types::PricingError;

/// The time-dependent drift that makes the Hull-White model reproduce an
/// observed discount curve exactly:
///
/// `theta(t) = df(0,t)/dt + a * f(0,t) + sigma^2 / (2a) * (1 - exp(-2at))`
///
/// where `f(0,t)` is the instantaneous forward rate implied by the curve.
/// Both derivatives are taken by finite differences, so the fit quality is
/// bounded by the smoothness of the curve interpolation.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ratekit_core::market_data::FlatCurve;
/// use ratekit_models::hull_white::ThetaFunction;
///
/// let curve = Arc::new(FlatCurve::new(0.05));
/// let theta = ThetaFunction::new(0.1, 0.01, curve).unwrap();
///
/// // On a flat curve f(0,t) = 5% and f'(0,t) = 0, so at t = 0 the drift
/// // is just a * f(0,0).
/// let t0 = theta.eval(0.0).unwrap();
/// assert!((t0 - 0.1 * 0.05).abs() < 1e-6);
/// ```
#[derive(Debug)]
pub struct ThetaFunction<C: DiscountCurve> {
    a: f64,
    sigma: f64,
    curve: Arc<C>,
}

// Manual impl: the curve is shared, so cloning needs no `C: Clone`.
impl<C: DiscountCurve> Clone for ThetaFunction<C> {
    fn clone(&self) -> Self {
        Self {
            a: self.a,
            sigma: self.sigma,
            curve: Arc::clone(&self.curve),
        }
    }
}

impl<C: DiscountCurve> ThetaFunction<C> {
    /// Builds the drift function for mean reversion `a`, volatility
    /// `sigma` and the given discount curve.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] when `a` or `sigma` is not
    /// strictly positive and finite. The `sigma^2 / (2a)` term makes
    /// `a = 0` genuinely singular rather than a removable limit here.
    pub fn new(a: f64, sigma: f64, curve: Arc<C>) -> Result<Self, PricingError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "mean reversion must be strictly positive and finite, got {a}"
            )));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be strictly positive and finite, got {sigma}"
            )));
        }
        Ok(Self { a, sigma, curve })
    }

    /// Mean-reversion speed.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Short-rate volatility.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Evaluates `theta(t)`.
    ///
    /// # Errors
    ///
    /// Propagates [`CurveError`] from the underlying curve, e.g. for
    /// negative `t`.
    pub fn eval(&self, t: f64) -> Result<f64, CurveError> {
        let fwd = instantaneous_forward_rate(self.curve.as_ref(), t)?;
        let dfwd = forward_rate_derivative(self.curve.as_ref(), t)?;
        let variance_term =
            self.sigma * self.sigma / (2.0 * self.a) * (1.0 - (-2.0 * self.a * t).exp());
        Ok(dfwd + self.a * fwd + variance_term)
    }

    /// Evaluates `theta` on a grid of times. Used by the simulation
    /// engine to precompute the drift once per scenario.
    pub fn eval_grid(&self, times: &[f64]) -> Result<Vec<f64>, CurveError> {
        times.iter().map(|&t| self.eval(t)).collect()
    }
}
