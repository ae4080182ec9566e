//! Calibration of `(a, sigma)` to market swaption prices.

use std::sync::Arc;

use ratekit_core::market_data::DiscountCurve;
use ratekit_core::math::solvers::{LMConfig, LevenbergMarquardtSolver};
use ratekit_core::traits::{CalibrationConfig, CalibrationResult, ParameterBounds};
use ratekit_core::types::CalibrationError;

use super::instruments::MarketSwaption;
use super::model::HullWhiteModel;

/// Residual assigned when a trial parameter set cannot price; large
/// enough that the optimiser backs away from the region immediately.
const PENALTY_RESIDUAL: f64 = 1e6;

/// A discount curve together with the swaption quotes to fit.
#[derive(Debug, Clone)]
pub struct HullWhiteMarketData<C: DiscountCurve> {
    /// Discount curve the model must reproduce exactly via `theta(t)`.
    pub curve: Arc<C>,
    /// Calibration targets.
    pub quotes: Vec<MarketSwaption>,
}

impl<C: DiscountCurve> HullWhiteMarketData<C> {
    /// Bundles a curve with its calibration targets.
    pub fn new(curve: Arc<C>, quotes: Vec<MarketSwaption>) -> Self {
        Self { curve, quotes }
    }

    /// Checks the data is usable: at least two quotes for the two free
    /// parameters, finite non-negative prices, and valid instruments.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] describing the first defect found.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if self.quotes.len() < 2 {
            return Err(CalibrationError::insufficient_data(self.quotes.len(), 2));
        }
        for (i, quote) in self.quotes.iter().enumerate() {
            if !quote.market_price.is_finite() || quote.market_price < 0.0 {
                return Err(CalibrationError::invalid_input(format!(
                    "quote {i} has invalid market price {}",
                    quote.market_price
                )));
            }
            quote
                .instrument
                .validate()
                .map_err(|err| CalibrationError::invalid_input(format!("quote {i}: {err}")))?;
        }
        Ok(())
    }
}

/// Least-squares calibrator for the Hull-White mean reversion and
/// volatility.
///
/// Residuals are raw price differences `model - market` per quote,
/// minimised by Levenberg-Marquardt. Box bounds are enforced by
/// clamping inside the residual function, so the optimiser can probe
/// freely while the model only ever sees admissible parameters.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ratekit_core::market_data::FlatCurve;
/// use ratekit_models::hull_white::{
///     EuropeanSwaption, HullWhiteCalibrator, HullWhiteMarketData, HullWhiteModel,
///     MarketSwaption, SwaptionStyle,
/// };
///
/// let curve = Arc::new(FlatCurve::new(0.03));
/// let truth = HullWhiteModel::new(0.08, 0.012, Arc::clone(&curve)).unwrap();
///
/// // Quotes generated by a known model are recovered by calibration.
/// let quotes: Vec<MarketSwaption> = [(1.0, 5.0), (2.0, 5.0), (3.0, 7.0)]
///     .iter()
///     .map(|&(expiry, tenor)| {
///         let swaption = EuropeanSwaption::new(
///             0.03, expiry, expiry, expiry + tenor, 0.5, SwaptionStyle::Payer,
///         )
///         .unwrap();
///         MarketSwaption::new(swaption, truth.swaption_price(&swaption).unwrap())
///     })
///     .collect();
///
/// let data = HullWhiteMarketData::new(curve, quotes);
/// let result = HullWhiteCalibrator::default().calibrate(&data).unwrap();
/// assert!((result.params.a() - 0.08).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct HullWhiteCalibrator {
    config: LMConfig,
    a_bounds: ParameterBounds,
    sigma_bounds: ParameterBounds,
    initial_guess: [f64; 2],
}

impl Default for HullWhiteCalibrator {
    fn default() -> Self {
        Self {
            config: LMConfig::default(),
            a_bounds: ParameterBounds::new(1e-5, 5.0),
            sigma_bounds: ParameterBounds::new(1e-5, 1.0),
            initial_guess: [0.1, 0.01],
        }
    }
}

impl HullWhiteCalibrator {
    /// Creates a calibrator from a [`CalibrationConfig`], mapping its
    /// convergence criteria onto the underlying optimiser.
    pub fn new(config: CalibrationConfig) -> Self {
        Self {
            config: LMConfig {
                tolerance: config.tolerance,
                max_iterations: config.max_iterations,
                param_tolerance: config.param_tolerance,
                ..LMConfig::default()
            },
            ..Default::default()
        }
    }

    /// Overrides the starting point `(a, sigma)`.
    pub fn with_initial_guess(mut self, a: f64, sigma: f64) -> Self {
        self.initial_guess = [a, sigma];
        self
    }

    /// Overrides the box bounds on `(a, sigma)`.
    pub fn with_bounds(mut self, a_bounds: ParameterBounds, sigma_bounds: ParameterBounds) -> Self {
        self.a_bounds = a_bounds;
        self.sigma_bounds = sigma_bounds;
        self
    }

    /// Fits `(a, sigma)` to the quotes and returns the calibrated model
    /// with fit diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] when the data fails validation or
    /// the optimiser does not converge within its iteration budget. A
    /// failed calibration never silently falls back to the initial
    /// guess.
    pub fn calibrate<C: DiscountCurve>(
        &self,
        data: &HullWhiteMarketData<C>,
    ) -> Result<CalibrationResult<HullWhiteModel<C>>, CalibrationError> {
        data.validate()?;

        let curve = Arc::clone(&data.curve);
        let quotes = data.quotes.clone();
        let a_bounds = self.a_bounds;
        let sigma_bounds = self.sigma_bounds;

        let residuals = move |params: &[f64]| -> Vec<f64> {
            let a = a_bounds.clamp(params[0]);
            let sigma = sigma_bounds.clamp(params[1]);
            let model = match HullWhiteModel::new(a, sigma, Arc::clone(&curve)) {
                Ok(model) => model,
                Err(_) => return vec![PENALTY_RESIDUAL; quotes.len()],
            };
            quotes
                .iter()
                .map(|quote| match model.swaption_price(&quote.instrument) {
                    Ok(price) => price - quote.market_price,
                    Err(_) => PENALTY_RESIDUAL,
                })
                .collect()
        };

        let solver = LevenbergMarquardtSolver::new(self.config.clone());
        let fit = solver.solve(&residuals, self.initial_guess.to_vec())?;

        let a = self.a_bounds.clamp(fit.params[0]);
        let sigma = self.sigma_bounds.clamp(fit.params[1]);

        if !fit.converged {
            return Err(CalibrationError::not_converged(fit.iterations, fit.residual_ss)
                .with_parameters(vec![a, sigma]));
        }

        let model = HullWhiteModel::new(a, sigma, Arc::clone(&data.curve))
            .map_err(|err| CalibrationError::invalid_input(err.to_string()))?;

        let final_residuals = residuals(&[a, sigma]);
        Ok(
            CalibrationResult::converged(model, fit.iterations, fit.residual_ss)
                .with_residuals(final_residuals),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ratekit_core::market_data::FlatCurve;

    use crate::hull_white::{EuropeanSwaption, SwaptionStyle};

    fn synthetic_quotes(
        truth: &HullWhiteModel<FlatCurve>,
        schedules: &[(f64, f64)],
    ) -> Vec<MarketSwaption> {
        schedules
            .iter()
            .map(|&(expiry, tenor_years)| {
                let instrument = EuropeanSwaption::new(
                    0.03,
                    expiry,
                    expiry,
                    expiry + tenor_years,
                    0.5,
                    SwaptionStyle::Payer,
                )
                .unwrap();
                MarketSwaption::new(instrument, truth.swaption_price(&instrument).unwrap())
            })
            .collect()
    }

    #[test]
    fn recovers_known_parameters_from_synthetic_quotes() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let (true_a, true_sigma) = (0.05, 0.01);
        let truth = HullWhiteModel::new(true_a, true_sigma, Arc::clone(&curve)).unwrap();

        let quotes = synthetic_quotes(&truth, &[(1.0, 4.0), (2.0, 5.0), (3.0, 7.0), (5.0, 5.0)]);
        let data = HullWhiteMarketData::new(curve, quotes);

        let result = HullWhiteCalibrator::default()
            .with_initial_guess(0.15, 0.02)
            .calibrate(&data)
            .unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.params.a(), true_a, max_relative = 0.01);
        assert_relative_eq!(result.params.sigma(), true_sigma, max_relative = 0.01);
        assert!(result.rmse() < 1e-6);
    }

    #[test]
    fn perfect_fit_has_tiny_residuals() {
        let curve = Arc::new(FlatCurve::new(0.04));
        let truth = HullWhiteModel::new(0.1, 0.015, Arc::clone(&curve)).unwrap();
        let quotes = synthetic_quotes(&truth, &[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let data = HullWhiteMarketData::new(curve, quotes);

        // Start at the truth: the optimiser should stop immediately.
        let result = HullWhiteCalibrator::default()
            .with_initial_guess(0.1, 0.015)
            .calibrate(&data)
            .unwrap();
        assert!(result.converged);
        assert!(result.residual_ss < 1e-12);
    }

    #[test]
    fn calibration_config_drives_the_optimiser() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let truth = HullWhiteModel::new(0.05, 0.01, Arc::clone(&curve)).unwrap();
        let quotes = synthetic_quotes(&truth, &[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let data = HullWhiteMarketData::new(curve, quotes);

        let calibrator = HullWhiteCalibrator::new(CalibrationConfig::high_precision());
        let result = calibrator.calibrate(&data).unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.params.a(), 0.05, max_relative = 0.01);

        // A one-iteration budget from a bad start cannot converge and
        // must surface as an error, not a defaulted parameter set.
        let starved = HullWhiteCalibrator::new(CalibrationConfig {
            max_iterations: 1,
            ..CalibrationConfig::default()
        })
        .with_initial_guess(1.0, 0.5);
        assert!(starved.calibrate(&data).is_err());
    }

    #[test]
    fn too_few_quotes_are_rejected() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let truth = HullWhiteModel::new(0.1, 0.01, Arc::clone(&curve)).unwrap();
        let quotes = synthetic_quotes(&truth, &[(1.0, 5.0)]);
        let data = HullWhiteMarketData::new(curve, quotes);

        let err = HullWhiteCalibrator::default().calibrate(&data).unwrap_err();
        assert!(err.to_string().contains("insufficient"));
    }

    #[test]
    fn invalid_quote_price_is_rejected() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let truth = HullWhiteModel::new(0.1, 0.01, Arc::clone(&curve)).unwrap();
        let mut quotes = synthetic_quotes(&truth, &[(1.0, 5.0), (2.0, 5.0)]);
        quotes[1].market_price = f64::NAN;
        let data = HullWhiteMarketData::new(curve, quotes);

        assert!(HullWhiteCalibrator::default().calibrate(&data).is_err());
    }

    #[test]
    fn calibrated_parameters_respect_bounds() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let truth = HullWhiteModel::new(0.05, 0.01, Arc::clone(&curve)).unwrap();
        let quotes = synthetic_quotes(&truth, &[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let data = HullWhiteMarketData::new(curve, quotes);

        let result = HullWhiteCalibrator::default().calibrate(&data).unwrap();
        assert!(result.params.a() >= 1e-5 && result.params.a() <= 5.0);
        assert!(result.params.sigma() >= 1e-5 && result.params.sigma() <= 1.0);
    }

    #[test]
    fn calibrated_model_reprices_quotes() {
        let curve = Arc::new(FlatCurve::new(0.03));
        let truth = HullWhiteModel::new(0.08, 0.012, Arc::clone(&curve)).unwrap();
        let quotes = synthetic_quotes(&truth, &[(1.0, 4.0), (2.0, 5.0), (4.0, 6.0)]);
        let data = HullWhiteMarketData::new(curve, quotes.clone());

        let result = HullWhiteCalibrator::default().calibrate(&data).unwrap();
        for quote in &quotes {
            let repriced = result.params.swaption_price(&quote.instrument).unwrap();
            assert_relative_eq!(repriced, quote.market_price, epsilon = 1e-6);
        }
    }
}
