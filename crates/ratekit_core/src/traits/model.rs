//! Risk-factor model capability trait.

/// Capability trait for a simulatable risk-factor model.
///
/// A risk-factor model is calibrated once to market data and then used to
/// generate scenario paths for its risk factor. The associated types keep
/// the trait agnostic of any particular model family: market data, the
/// calibrated state, the scenario description, and the simulation output
/// are all chosen by the implementation.
///
/// # Contract
///
/// - `calibrate` must not fall back to default parameters on failure; a
///   calibration that does not converge is an error
/// - `simulate` consumes a calibrated state produced by the same model
///
/// # Example
///
/// ```
/// use ratekit_core::traits::RiskFactorModel;
///
/// struct Constant;
///
/// impl RiskFactorModel for Constant {
///     type MarketData = f64;
///     type Calibrated = f64;
///     type Scenario = usize;
///     type Output = Vec<f64>;
///     type Error = std::convert::Infallible;
///
///     fn name(&self) -> &'static str {
///         "constant"
///     }
///
///     fn calibrate(&self, data: &f64) -> Result<f64, Self::Error> {
///         Ok(*data)
///     }
///
///     fn simulate(&self, level: &f64, n: &usize) -> Result<Vec<f64>, Self::Error> {
///         Ok(vec![*level; *n])
///     }
/// }
/// ```
pub trait RiskFactorModel {
    /// Market data the model calibrates to.
    type MarketData;
    /// Calibrated model state.
    type Calibrated;
    /// Scenario description for simulation.
    type Scenario;
    /// Simulation output.
    type Output;
    /// Error type for calibration and simulation failures.
    type Error;

    /// Human-readable model name.
    fn name(&self) -> &'static str;

    /// Calibrate the model to market data.
    fn calibrate(&self, data: &Self::MarketData) -> Result<Self::Calibrated, Self::Error>;

    /// Simulate the risk factor under the given scenario.
    fn simulate(
        &self,
        calibrated: &Self::Calibrated,
        scenario: &Self::Scenario,
    ) -> Result<Self::Output, Self::Error>;
}
