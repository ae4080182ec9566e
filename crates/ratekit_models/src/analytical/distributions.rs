//! Standard normal distribution functions.
//!
//! The CDF uses the Abramowitz & Stegun rational approximation of the
//! complementary error function (formula 7.1.26), accurate to roughly
//! 1.5e-7 across the real line. That is ample for bond-option and
//! swaption pricing, where curve and volatility inputs carry far more
//! uncertainty than the distribution tail.

use num_traits::Float;

/// 1 / sqrt(2 * pi), the normalising constant of the standard normal pdf.
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density function.
///
/// # Example
///
/// ```
/// use ratekit_models::analytical::norm_pdf;
///
/// let peak = norm_pdf(0.0_f64);
/// assert!((peak - 0.3989422804).abs() < 1e-9);
/// ```
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::zero);
    let norm = T::from(FRAC_1_SQRT_2PI).unwrap_or_else(T::zero);
    norm * (-half * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// # Example
///
/// ```
/// use ratekit_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(4.0_f64) > 0.9999);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::zero);
    let sqrt2 = T::from(std::f64::consts::SQRT_2).unwrap_or_else(T::one);
    half * erfc_approx(-x / sqrt2)
}

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// polynomial in `t = 1 / (1 + p|x|)`.
fn erfc_approx<T: Float>(x: T) -> T {
    let a1 = T::from(0.254_829_592).unwrap_or_else(T::zero);
    let a2 = T::from(-0.284_496_736).unwrap_or_else(T::zero);
    let a3 = T::from(1.421_413_741).unwrap_or_else(T::zero);
    let a4 = T::from(-1.453_152_027).unwrap_or_else(T::zero);
    let a5 = T::from(1.061_405_429).unwrap_or_else(T::zero);
    let p = T::from(0.327_591_1).unwrap_or_else(T::zero);

    let abs_x = x.abs();
    let t = T::one() / (T::one() + p * abs_x);
    let poly = ((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t;
    let erfc = poly * (-abs_x * abs_x).exp();

    if x >= T::zero() {
        erfc
    } else {
        T::from(2.0).unwrap_or_else(T::one) - erfc
    }
}
