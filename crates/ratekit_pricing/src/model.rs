//! The end-to-end Hull-White capability object.

use std::marker::PhantomData;

use thiserror::Error;

use ratekit_core::market_data::DiscountCurve;
use ratekit_core::traits::{CalibrationResult, RiskFactorModel};
use ratekit_core::types::{CalibrationError, PricingError};
use ratekit_models::hull_white::{HullWhiteCalibrator, HullWhiteMarketData, HullWhiteModel};

use crate::simulation::{
    ShortRateSimulator, SimulationError, SimulationResult, SimulationScenario,
};

/// Any failure across the calibrate-price-simulate pipeline.
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    /// Calibration to market quotes failed.
    #[error("calibration failed: {0}")]
    Calibration(#[from] CalibrationError),

    /// Analytical pricing failed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Path simulation failed.
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),
}

/// Hull-White one-factor model as a [`RiskFactorModel`] capability:
/// calibrate `(a, sigma)` to swaption quotes, then generate short-rate
/// paths under the fitted dynamics.
///
/// The facade owns the calibration policy and the simulation seed so a
/// full run is reproducible from the facade configuration plus the
/// market data alone.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ratekit_core::market_data::FlatCurve;
/// use ratekit_core::traits::RiskFactorModel;
/// use ratekit_models::hull_white::{
///     EuropeanSwaption, HullWhiteMarketData, HullWhiteModel, MarketSwaption, SwaptionStyle,
/// };
/// use ratekit_pricing::{HullWhiteOneFactor, simulation::SimulationScenario};
///
/// let curve = Arc::new(FlatCurve::new(0.03));
/// let truth = HullWhiteModel::new(0.08, 0.012, Arc::clone(&curve)).unwrap();
/// let quotes: Vec<MarketSwaption> = [(1.0, 6.0), (2.0, 7.0), (3.0, 8.0)]
///     .iter()
///     .map(|&(expiry, end)| {
///         let swaption =
///             EuropeanSwaption::new(0.03, expiry, expiry, end, 0.5, SwaptionStyle::Payer)
///                 .unwrap();
///         MarketSwaption::new(swaption, truth.swaption_price(&swaption).unwrap())
///     })
///     .collect();
///
/// let facade = HullWhiteOneFactor::new(42);
/// let calibrated = facade
///     .calibrate(&HullWhiteMarketData::new(curve, quotes))
///     .unwrap();
/// let scenario = SimulationScenario::new(50, 1.0, 0.02).unwrap();
/// let paths = facade.simulate(&calibrated, &scenario).unwrap();
/// assert_eq!(paths.num_paths(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct HullWhiteOneFactor<C> {
    calibrator: HullWhiteCalibrator,
    seed: u64,
    _curve: PhantomData<fn() -> C>,
}

impl<C> HullWhiteOneFactor<C> {
    /// Creates the facade with default calibration settings and the
    /// given simulation seed.
    pub fn new(seed: u64) -> Self {
        Self {
            calibrator: HullWhiteCalibrator::default(),
            seed,
            _curve: PhantomData,
        }
    }

    /// Overrides the calibration policy.
    pub fn with_calibrator(mut self, calibrator: HullWhiteCalibrator) -> Self {
        self.calibrator = calibrator;
        self
    }

    /// The simulation seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<C: DiscountCurve + Sync> RiskFactorModel for HullWhiteOneFactor<C> {
    type MarketData = HullWhiteMarketData<C>;
    type Calibrated = CalibrationResult<HullWhiteModel<C>>;
    type Scenario = SimulationScenario;
    type Output = SimulationResult;
    type Error = ModelError;

    fn name(&self) -> &'static str {
        "hull-white-1f"
    }

    fn calibrate(&self, data: &Self::MarketData) -> Result<Self::Calibrated, Self::Error> {
        Ok(self.calibrator.calibrate(data)?)
    }

    fn simulate(
        &self,
        calibrated: &Self::Calibrated,
        scenario: &Self::Scenario,
    ) -> Result<Self::Output, Self::Error> {
        let simulator = ShortRateSimulator::new(calibrated.params.clone());
        Ok(simulator.simulate_seeded(scenario, self.seed)?)
    }
}
