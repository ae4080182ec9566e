//! Analytical Hull-White pricers: zero-coupon bonds, options on bonds,
//! and European swaptions via Jamshidian decomposition.

use ratekit_core::market_data::DiscountCurve;
use ratekit_core::math::solvers::{BrentSolver, SolverConfig};
use ratekit_core::types::{PricingError, SolverError};

use crate::analytical::norm_cdf;

use super::instruments::{EuropeanSwaption, OptionType, SwaptionStyle};
use super::model::HullWhiteModel;

/// Below this, the mean reversion is treated as zero and `B` takes its
/// `T - t` limit.
const SMALL_MEAN_REVERSION: f64 = 1e-12;

/// Volatility threshold below which a bond option collapses to its
/// discounted intrinsic value.
const DEGENERATE_VOL: f64 = 1e-12;

/// Search interval for the Jamshidian critical short rate.
const CRITICAL_RATE_BRACKET: (f64, f64) = (-0.5, 0.5);

/// The Hull-White bond duration factor
/// `B(t, T) = (1 - exp(-a (T - t))) / a`,
/// with the limit `T - t` as `a -> 0`.
///
/// # Example
///
/// ```
/// use ratekit_models::hull_white::b_factor;
///
/// // Vanishing mean reversion reduces to the time interval.
/// assert!((b_factor(0.0, 5.0, 1e-15) - 5.0).abs() < 1e-12);
/// ```
pub fn b_factor(t: f64, maturity: f64, a: f64) -> f64 {
    let dt = maturity - t;
    if a.abs() < SMALL_MEAN_REVERSION {
        dt
    } else {
        (1.0 - (-a * dt).exp()) / a
    }
}

impl<C: DiscountCurve> HullWhiteModel<C> {
    /// The deterministic bond-price factor `A(t, T)` in
    /// `P(t, T) = A(t, T) * exp(-B(t, T) * r(t))`:
    ///
    /// `A = P(0,T)/P(0,t) * exp(B * f(0,t) - sigma^2/(4a) * (1 - exp(-2at)) * B^2)`
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] when `t` or `maturity` is
    /// out of order or negative, or when the curve rejects a lookup.
    pub fn a_factor(&self, t: f64, maturity: f64) -> Result<f64, PricingError> {
        validate_interval(t, maturity)?;
        let (a_fac, _) = self.bond_factors(t, maturity)?;
        Ok(a_fac)
    }

    /// `(A, B)` for the affine bond price `P(t, maturity) = A * exp(-B * r)`,
    /// without the `maturity >= t` check: the Jamshidian floating leg
    /// references `tenor_start`, which precedes expiry for a swap already
    /// running, and the affine form extends there.
    fn bond_factors(&self, t: f64, maturity: f64) -> Result<(f64, f64), PricingError> {
        let p0_t = self.curve().bond_price(t)?;
        let p0_mat = self.curve().bond_price(maturity)?;
        let fwd = ratekit_core::market_data::curves::instantaneous_forward_rate(
            self.curve().as_ref(),
            t,
        )?;
        let a = self.a();
        let sigma = self.sigma();
        let b = b_factor(t, maturity, a);
        let variance = sigma * sigma / (4.0 * a) * (1.0 - (-2.0 * a * t).exp());
        Ok((p0_mat / p0_t * (b * fwd - variance * b * b).exp(), b))
    }

    /// Price at time `t` of a zero-coupon bond maturing at `maturity`,
    /// conditional on the short rate `short_rate` prevailing at `t`.
    ///
    /// At `t = 0` with `short_rate = r(0)` this reproduces the input
    /// curve's discount factor.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] for a negative `t` or an
    /// inverted interval.
    pub fn zero_coupon_bond_price(
        &self,
        t: f64,
        maturity: f64,
        short_rate: f64,
    ) -> Result<f64, PricingError> {
        if !short_rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "short rate must be finite, got {short_rate}"
            )));
        }
        let a = self.a_factor(t, maturity)?;
        let b = b_factor(t, maturity, self.a());
        Ok(a * (-b * short_rate).exp())
    }

    /// Price of a European option on a zero-coupon bond.
    ///
    /// The option expires at `expiry` on a bond maturing at `maturity`
    /// with the given `strike`. Under Hull-White the bond price at
    /// expiry is lognormal with volatility
    ///
    /// `sigma_p = sigma * sqrt((1 - exp(-2a T)) / (2a)) * B(T, S)`
    ///
    /// and the price is the Black-style formula on discount factors.
    /// A degenerate `sigma_p` (zero expiry or vanishing volatility)
    /// returns the discounted intrinsic value.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] when `strike <= 0` or
    /// `maturity <= expiry`.
    pub fn zcb_option_price(
        &self,
        expiry: f64,
        maturity: f64,
        strike: f64,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "strike must be strictly positive, got {strike}"
            )));
        }
        if !expiry.is_finite() || expiry < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "expiry must be non-negative, got {expiry}"
            )));
        }
        if !maturity.is_finite() || maturity <= expiry {
            return Err(PricingError::InvalidInput(format!(
                "bond maturity must exceed option expiry, got expiry {expiry}, maturity {maturity}"
            )));
        }

        let p0_expiry = self.curve().bond_price(expiry)?;
        let p0_maturity = self.curve().bond_price(maturity)?;

        let a = self.a();
        let sigma_p = self.sigma()
            * ((1.0 - (-2.0 * a * expiry).exp()) / (2.0 * a)).sqrt()
            * b_factor(expiry, maturity, a);

        if sigma_p < DEGENERATE_VOL {
            let intrinsic = match option_type {
                OptionType::Call => p0_maturity - strike * p0_expiry,
                OptionType::Put => strike * p0_expiry - p0_maturity,
            };
            return Ok(intrinsic.max(0.0));
        }

        let h = (p0_maturity / (p0_expiry * strike)).ln() / sigma_p + 0.5 * sigma_p;
        let price = match option_type {
            OptionType::Call => {
                p0_maturity * norm_cdf(h) - strike * p0_expiry * norm_cdf(h - sigma_p)
            }
            OptionType::Put => {
                strike * p0_expiry * norm_cdf(sigma_p - h) - p0_maturity * norm_cdf(-h)
            }
        };
        Ok(price)
    }

    /// Price of a European swaption by Jamshidian decomposition.
    ///
    /// The critical short rate `r*` equates the swap's two legs at
    /// expiry: the fixed leg `sum of freq * swap_rate * P(expiry, t_i; r)`
    /// over the remaining payment dates against the floating leg
    /// `P(expiry, tenor_start; r) - P(expiry, tenor_end; r)`. Each
    /// remaining date then contributes a coupon-weighted option on the
    /// zero-coupon bond maturing there, struck at its price under `r*`.
    /// Payer swaptions decompose into calls on the zeros, receivers into
    /// puts.
    ///
    /// A swaption whose payment schedule is entirely at or before
    /// expiry has no optionality left and prices to zero. If `r*`
    /// cannot be bracketed in a wide short-rate interval the option is
    /// so deep in or out of the money that the decomposition degenerates;
    /// this also prices to zero rather than failing the whole
    /// calibration that called it.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] for an invalid schedule and
    /// [`PricingError::NumericalInstability`] when the critical-rate
    /// search fails to converge.
    pub fn swaption_price(&self, swaption: &EuropeanSwaption) -> Result<f64, PricingError> {
        swaption.validate()?;

        let dates = swaption.payment_dates();
        if dates.is_empty() {
            return Ok(0.0);
        }

        let coupon = swaption.fixed_frequency * swaption.swap_rate;

        // Bond-price factors at expiry, computed once so the root
        // search closure is pure arithmetic.
        let mut a_factors = Vec::with_capacity(dates.len());
        let mut b_factors = Vec::with_capacity(dates.len());
        for &date in &dates {
            let (af, bf) = self.bond_factors(swaption.expiry, date)?;
            a_factors.push(af);
            b_factors.push(bf);
        }
        let (a_start, b_start) = self.bond_factors(swaption.expiry, swaption.tenor_start)?;
        let (a_end, b_end) = self.bond_factors(swaption.expiry, swaption.tenor_end)?;

        // Fixed leg minus floating leg at expiry, as a function of the
        // short rate prevailing there.
        let swap_pv_at_expiry = |r: f64| -> f64 {
            let fixed: f64 = a_factors
                .iter()
                .zip(b_factors.iter())
                .map(|(&af, &bf)| coupon * af * (-bf * r).exp())
                .sum();
            let floating = a_start * (-b_start * r).exp() - a_end * (-b_end * r).exp();
            fixed - floating
        };

        let solver = BrentSolver::new(SolverConfig::default());
        let critical_rate = match solver.find_root(
            swap_pv_at_expiry,
            CRITICAL_RATE_BRACKET.0,
            CRITICAL_RATE_BRACKET.1,
        ) {
            Ok(r) => r,
            Err(SolverError::NoBracket { .. }) => return Ok(0.0),
            Err(err) => {
                return Err(PricingError::NumericalInstability(format!(
                    "critical rate search failed: {err}"
                )))
            }
        };

        let option_type = match swaption.style {
            SwaptionStyle::Payer => OptionType::Call,
            SwaptionStyle::Receiver => OptionType::Put,
        };

        let mut price = 0.0;
        for (i, &date) in dates.iter().enumerate() {
            let strike = a_factors[i] * (-b_factors[i] * critical_rate).exp();
            price += coupon * self.zcb_option_price(swaption.expiry, date, strike, option_type)?;
        }
        Ok(price)
    }
}

fn validate_interval(t: f64, maturity: f64) -> Result<(), PricingError> {
    if !t.is_finite() || t < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "observation time must be non-negative, got {t}"
        )));
    }
    if !maturity.is_finite() || maturity < t {
        return Err(PricingError::InvalidInput(format!(
            "maturity must not precede observation time, got t {t}, maturity {maturity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ratekit_core::market_data::FlatCurve;
    use std::sync::Arc;

    fn flat_model(a: f64, sigma: f64, rate: f64) -> HullWhiteModel<FlatCurve> {
        HullWhiteModel::new(a, sigma, Arc::new(FlatCurve::new(rate))).unwrap()
    }

    #[test]
    fn b_factor_limits() {
        // Small mean reversion reduces to the interval length.
        assert_relative_eq!(b_factor(1.0, 4.0, 1e-13), 3.0, epsilon = 1e-12);
        // Closed form for a = 0.1 over 5 years.
        let expected = (1.0 - (-0.5_f64).exp()) / 0.1;
        assert_relative_eq!(b_factor(0.0, 5.0, 0.1), expected, epsilon = 1e-12);
        // Zero interval.
        assert_relative_eq!(b_factor(2.0, 2.0, 0.1), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn b_factor_decreases_with_mean_reversion() {
        let mut prev = b_factor(0.0, 5.0, 1e-13);
        for &a in &[0.01, 0.05, 0.1, 0.5, 1.0] {
            let b = b_factor(0.0, 5.0, a);
            assert!(b < prev);
            prev = b;
        }
    }

    #[test]
    fn b_factor_is_bounded_by_one_over_a() {
        let a = 0.2;
        for &horizon in &[1.0, 10.0, 100.0] {
            let b = b_factor(0.0, horizon, a);
            assert!(b > 0.0 && b < 1.0 / a + 1e-12);
        }
    }

    #[test]
    fn bond_price_at_origin_reproduces_curve() {
        let model = flat_model(0.1, 0.01, 0.05);
        let r0 = model.short_rate_at_origin().unwrap();
        for &maturity in &[0.5, 1.0, 5.0, 10.0] {
            let model_price = model.zero_coupon_bond_price(0.0, maturity, r0).unwrap();
            let curve_price = model.curve().bond_price(maturity).unwrap();
            assert_relative_eq!(model_price, curve_price, epsilon = 1e-6);
        }
    }

    #[test]
    fn bond_price_decreases_with_short_rate() {
        let model = flat_model(0.1, 0.01, 0.03);
        let low = model.zero_coupon_bond_price(1.0, 5.0, 0.01).unwrap();
        let high = model.zero_coupon_bond_price(1.0, 5.0, 0.06).unwrap();
        assert!(low > high);
    }

    #[test]
    fn bond_price_rejects_bad_inputs() {
        let model = flat_model(0.1, 0.01, 0.03);
        assert!(model.zero_coupon_bond_price(-1.0, 5.0, 0.03).is_err());
        assert!(model.zero_coupon_bond_price(5.0, 1.0, 0.03).is_err());
        assert!(model.zero_coupon_bond_price(1.0, 5.0, f64::NAN).is_err());
    }

    #[test]
    fn option_put_call_parity() {
        // call - put = P(0,S) - K * P(0,T)
        let model = flat_model(0.1, 0.01, 0.05);
        let (expiry, maturity, strike) = (1.0, 5.0, 0.8);
        let call = model
            .zcb_option_price(expiry, maturity, strike, OptionType::Call)
            .unwrap();
        let put = model
            .zcb_option_price(expiry, maturity, strike, OptionType::Put)
            .unwrap();
        let p0_t = model.curve().bond_price(expiry).unwrap();
        let p0_s = model.curve().bond_price(maturity).unwrap();
        assert_relative_eq!(call - put, p0_s - strike * p0_t, epsilon = 1e-10);
    }

    #[test]
    fn option_prices_are_monotone_in_strike() {
        let model = flat_model(0.1, 0.01, 0.05);
        let call_low = model
            .zcb_option_price(1.0, 5.0, 0.7, OptionType::Call)
            .unwrap();
        let call_high = model
            .zcb_option_price(1.0, 5.0, 0.9, OptionType::Call)
            .unwrap();
        assert!(call_low > call_high);

        let put_low = model
            .zcb_option_price(1.0, 5.0, 0.7, OptionType::Put)
            .unwrap();
        let put_high = model
            .zcb_option_price(1.0, 5.0, 0.9, OptionType::Put)
            .unwrap();
        assert!(put_low < put_high);
    }

    #[test]
    fn zero_expiry_option_is_discounted_intrinsic() {
        let model = flat_model(0.1, 0.01, 0.05);
        let p0_s = model.curve().bond_price(5.0).unwrap();
        // Deep in-the-money call: intrinsic is P(0,S) - K since P(0,0) = 1.
        let call = model
            .zcb_option_price(0.0, 5.0, 0.5, OptionType::Call)
            .unwrap();
        assert_relative_eq!(call, p0_s - 0.5, epsilon = 1e-12);
        // Out-of-the-money put at zero expiry is worthless.
        let put = model
            .zcb_option_price(0.0, 5.0, 0.5, OptionType::Put)
            .unwrap();
        assert_relative_eq!(put, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn option_rejects_bad_inputs() {
        let model = flat_model(0.1, 0.01, 0.05);
        assert!(model
            .zcb_option_price(1.0, 5.0, 0.0, OptionType::Call)
            .is_err());
        assert!(model
            .zcb_option_price(1.0, 5.0, -0.2, OptionType::Call)
            .is_err());
        assert!(model
            .zcb_option_price(5.0, 1.0, 0.8, OptionType::Call)
            .is_err());
        assert!(model
            .zcb_option_price(5.0, 5.0, 0.8, OptionType::Put)
            .is_err());
    }

    #[test]
    fn option_value_increases_with_volatility() {
        let low_vol = flat_model(0.1, 0.005, 0.05);
        let high_vol = flat_model(0.1, 0.02, 0.05);
        // At-the-forward strike so both options carry pure time value.
        let strike = low_vol.curve().bond_price(5.0).unwrap()
            / low_vol.curve().bond_price(1.0).unwrap();
        let cheap = low_vol
            .zcb_option_price(1.0, 5.0, strike, OptionType::Call)
            .unwrap();
        let rich = high_vol
            .zcb_option_price(1.0, 5.0, strike, OptionType::Call)
            .unwrap();
        assert!(rich > cheap);
    }

    fn swaption(rate: f64, style: SwaptionStyle) -> EuropeanSwaption {
        EuropeanSwaption::new(rate, 1.0, 1.0, 6.0, 0.5, style).unwrap()
    }

    #[test]
    fn swaption_prices_are_positive() {
        let model = flat_model(0.1, 0.01, 0.05);
        let payer = model.swaption_price(&swaption(0.05, SwaptionStyle::Payer)).unwrap();
        let receiver = model
            .swaption_price(&swaption(0.05, SwaptionStyle::Receiver))
            .unwrap();
        assert!(payer > 0.0);
        assert!(receiver > 0.0);
    }

    #[test]
    fn swaption_value_is_the_coupon_weighted_option_sum() {
        // Hand-checked decomposition: payer, 5% fixed, 1y expiry into a
        // 5y semi-annual swap on a flat 5% curve with a = 0.1,
        // sigma = 0.01. The value is the sum of coupon-weighted calls
        // only; no whole-notional option on the final bond enters.
        let model = flat_model(0.1, 0.01, 0.05);
        let instrument =
            EuropeanSwaption::new(0.05, 1.0, 1.0, 6.0, 0.5, SwaptionStyle::Payer).unwrap();
        let price = model.swaption_price(&instrument).unwrap();
        assert_relative_eq!(price, 1.59048e-3, epsilon = 1e-7);
        // An extra unit-notional call on the 6y bond would add ~1e-2.
        assert!(price < 5e-3);
    }

    #[test]
    fn forward_starting_swaption_prices_its_first_coupon() {
        // Underlying starts a year after expiry, so tenor_start is a
        // payment date. Shrinking the tenor by exactly that first period
        // must strictly reduce the payer value.
        let model = flat_model(0.1, 0.01, 0.05);
        let full =
            EuropeanSwaption::new(0.05, 1.0, 2.0, 4.0, 0.5, SwaptionStyle::Payer).unwrap();
        let full_price = model.swaption_price(&full).unwrap();
        assert!(full_price > 0.0 && full_price.is_finite());

        let trimmed =
            EuropeanSwaption::new(0.05, 1.0, 2.5, 4.0, 0.5, SwaptionStyle::Payer).unwrap();
        assert_eq!(full.payment_dates().len(), trimmed.payment_dates().len() + 1);
        let trimmed_price = model.swaption_price(&trimmed).unwrap();
        assert!(full_price > trimmed_price);
    }

    #[test]
    fn swaption_with_expired_schedule_is_worthless() {
        let model = flat_model(0.1, 0.01, 0.05);
        let expired =
            EuropeanSwaption::new(0.05, 10.0, 0.0, 5.0, 0.5, SwaptionStyle::Payer).unwrap();
        assert_relative_eq!(model.swaption_price(&expired).unwrap(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn swaption_value_increases_with_volatility() {
        let low_vol = flat_model(0.1, 0.005, 0.05);
        let high_vol = flat_model(0.1, 0.02, 0.05);
        let instrument = swaption(0.05, SwaptionStyle::Payer);
        let cheap = low_vol.swaption_price(&instrument).unwrap();
        let rich = high_vol.swaption_price(&instrument).unwrap();
        assert!(rich > cheap);
    }

    #[test]
    fn swaption_price_is_monotone_in_a() {
        // Stronger mean reversion damps rate variance over the tenor,
        // so the swaption gets cheaper.
        let weak = flat_model(0.05, 0.01, 0.05);
        let strong = flat_model(0.5, 0.01, 0.05);
        let instrument = swaption(0.05, SwaptionStyle::Payer);
        assert!(weak.swaption_price(&instrument).unwrap() > strong.swaption_price(&instrument).unwrap());
    }

    #[test]
    fn swaption_rejects_invalid_instrument() {
        let model = flat_model(0.1, 0.01, 0.05);
        let mut bad = swaption(0.05, SwaptionStyle::Payer);
        bad.fixed_frequency = -0.5;
        assert!(model.swaption_price(&bad).is_err());
    }

    #[test]
    fn a_factor_at_coincident_times_is_one() {
        let model = flat_model(0.1, 0.01, 0.05);
        assert_relative_eq!(model.a_factor(2.0, 2.0).unwrap(), 1.0, epsilon = 1e-12);
    }
}
