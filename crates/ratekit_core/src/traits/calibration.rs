//! Calibration configuration, bounds, and result types.

use std::fmt;

/// Configuration for a calibration run.
///
/// Controls convergence criteria and the iteration limit for the underlying
/// least-squares optimisation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationConfig {
    /// Maximum number of optimiser iterations.
    pub max_iterations: usize,
    /// Convergence tolerance for the residual norm.
    pub tolerance: f64,
    /// Tolerance for the relative parameter change.
    pub param_tolerance: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-8,
            param_tolerance: 1e-10,
        }
    }
}

impl CalibrationConfig {
    /// Create a configuration with the given tolerance and iteration limit.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }

    /// High-precision configuration for slow but accurate fits.
    pub fn high_precision() -> Self {
        Self {
            max_iterations: 500,
            tolerance: 1e-12,
            param_tolerance: 1e-14,
        }
    }
}

/// Result of a calibration run.
///
/// Carries the final parameters, convergence status, and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationResult<P> {
    /// Final calibrated parameters.
    pub params: P,
    /// Whether the optimiser converged.
    pub converged: bool,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final residual sum of squares.
    pub residual_ss: f64,
    /// Individual residuals at the final parameters.
    pub residuals: Vec<f64>,
}

impl<P> CalibrationResult<P> {
    /// Create a successful (converged) result.
    pub fn converged(params: P, iterations: usize, residual_ss: f64) -> Self {
        Self {
            params,
            converged: true,
            iterations,
            residual_ss,
            residuals: Vec::new(),
        }
    }

    /// Attach the residual vector at the final parameters.
    pub fn with_residuals(mut self, residuals: Vec<f64>) -> Self {
        self.residuals = residuals;
        self
    }

    /// Root mean square pricing error.
    pub fn rmse(&self) -> f64 {
        if self.residuals.is_empty() {
            self.residual_ss.sqrt()
        } else {
            (self.residual_ss / self.residuals.len() as f64).sqrt()
        }
    }
}

impl<P: fmt::Debug> fmt::Display for CalibrationResult<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CalibrationResult {{ converged: {}, iterations: {}, RMSE: {:.6e} }}",
            self.converged,
            self.iterations,
            self.rmse()
        )
    }
}

/// Box bounds for a single calibration parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterBounds {
    /// Minimum allowed value.
    pub min: f64,
    /// Maximum allowed value.
    pub max: f64,
}

impl ParameterBounds {
    /// Create new bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Unbounded parameter.
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Check if a value is within bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to the bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}
