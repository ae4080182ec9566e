//! Finite-difference curve calculus.
//!
//! Instantaneous forward rates and their time derivative, computed by
//! bump-and-reprice on any [`DiscountCurve`]. These quantities feed the
//! Hull-White theta fit: θ(t) needs both f(0, t) and ∂f(0, t)/∂t.

use super::DiscountCurve;
use crate::market_data::error::CurveError;

/// Finite-difference step for forward-rate calculations.
pub const FORWARD_RATE_STEP: f64 = 1e-5;

/// Instantaneous forward rate f(0, t) = -∂ ln P(0, T)/∂T at T = t.
///
/// Uses a central difference with step [`FORWARD_RATE_STEP`]; for
/// `t < FORWARD_RATE_STEP` a one-sided (forward) difference is used so the
/// curve is never queried at a negative maturity.
///
/// # Example
///
/// ```
/// use ratekit_core::market_data::curves::{FlatCurve, instantaneous_forward_rate};
///
/// let curve = FlatCurve::new(0.04);
/// let fwd = instantaneous_forward_rate(&curve, 3.0).unwrap();
/// assert!((fwd - 0.04).abs() < 1e-6);
/// ```
pub fn instantaneous_forward_rate<C: DiscountCurve>(curve: &C, t: f64) -> Result<f64, CurveError> {
    if t < 0.0 {
        return Err(CurveError::InvalidMaturity { t });
    }
    let eps = FORWARD_RATE_STEP;

    let log_price = |t: f64| -> Result<f64, CurveError> {
        let price = curve.bond_price(t)?;
        if price <= 0.0 {
            return Err(CurveError::NonPositivePrice { t, price });
        }
        Ok(price.ln())
    };

    if t < eps {
        Ok(-(log_price(t + eps)? - log_price(t)?) / eps)
    } else {
        Ok(-(log_price(t + eps)? - log_price(t - eps)?) / (2.0 * eps))
    }
}

/// Time derivative ∂f(0, t)/∂t of the instantaneous forward rate.
///
/// Central difference of [`instantaneous_forward_rate`], falling back to a
/// one-sided difference near t = 0.
pub fn forward_rate_derivative<C: DiscountCurve>(curve: &C, t: f64) -> Result<f64, CurveError> {
    if t < 0.0 {
        return Err(CurveError::InvalidMaturity { t });
    }
    let eps = FORWARD_RATE_STEP;

    if t < 2.0 * eps {
        let f_up = instantaneous_forward_rate(curve, t + eps)?;
        let f_at = instantaneous_forward_rate(curve, t)?;
        Ok((f_up - f_at) / eps)
    } else {
        let f_up = instantaneous_forward_rate(curve, t + eps)?;
        let f_down = instantaneous_forward_rate(curve, t - eps)?;
        Ok((f_up - f_down) / (2.0 * eps))
    }
}

/// Short rate at the origin, r(0) = f(0, ε).
///
/// Evaluating at ε rather than 0 keeps the finite-difference stencil inside
/// the curve domain.
pub fn short_rate_at_origin<C: DiscountCurve>(curve: &C) -> Result<f64, CurveError> {
    instantaneous_forward_rate(curve, FORWARD_RATE_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::{FlatCurve, InterpolatedDiscountCurve};
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_curve_forward_rate_equals_rate() {
        let curve = FlatCurve::new(0.05);
        for t in [0.0, 0.5, 1.0, 5.0, 20.0] {
            let fwd = instantaneous_forward_rate(&curve, t).unwrap();
            assert_relative_eq!(fwd, 0.05, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_flat_curve_forward_derivative_is_zero() {
        let curve = FlatCurve::new(0.05);
        for t in [0.0, 1.0, 10.0] {
            let deriv = forward_rate_derivative(&curve, t).unwrap();
            assert!(deriv.abs() < 1e-5, "deriv at t={} was {}", t, deriv);
        }
    }

    #[test]
    fn test_short_rate_at_origin_flat() {
        let curve = FlatCurve::new(0.03);
        assert_relative_eq!(short_rate_at_origin(&curve).unwrap(), 0.03, epsilon = 1e-8);
    }

    #[test]
    fn test_forward_rate_near_zero_uses_one_sided_stencil() {
        let curve = FlatCurve::new(0.05);
        // Must not error even though t - eps would be negative
        let fwd = instantaneous_forward_rate(&curve, FORWARD_RATE_STEP / 2.0).unwrap();
        assert_relative_eq!(fwd, 0.05, epsilon = 1e-7);
    }

    #[test]
    fn test_negative_maturity_rejected() {
        let curve = FlatCurve::new(0.05);
        assert!(instantaneous_forward_rate(&curve, -1.0).is_err());
        assert!(forward_rate_derivative(&curve, -1.0).is_err());
    }

    #[test]
    fn test_interpolated_curve_forward_rate() {
        // Upward sloping zero curve: r(t) = 0.02 + 0.005 t
        // f(0, t) = d/dt [r(t) t] = 0.02 + 0.01 t
        let ts: Vec<f64> = vec![0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0];
        let ps: Vec<f64> = ts
            .iter()
            .map(|&t| (-(0.02 + 0.005 * t) * t).exp())
            .collect();
        let curve = InterpolatedDiscountCurve::new(&ts, &ps).unwrap();

        for t in [1.0, 2.0, 4.0] {
            let expected = 0.02 + 0.01 * t;
            let fwd = instantaneous_forward_rate(&curve, t).unwrap();
            assert!(
                (fwd - expected).abs() < 2e-3,
                "At t={}, expected ~{}, got {}",
                t,
                expected,
                fwd
            );
        }
    }
}
