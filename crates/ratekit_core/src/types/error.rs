//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation operations
//! - `SolverError`: Errors from root-finding and least-squares solvers
//! - `PricingError`: Errors from analytical pricing operations
//! - `CalibrationError`: Errors from model calibration

use std::fmt;
use thiserror::Error;

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use ratekit_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Root-finding and least-squares solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: General numerical instability
///
/// # Examples
/// ```
/// use ratekit_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid instrument or model parameters
/// - `NumericalInstability`: Computation failed to produce a finite result
///
/// # Examples
/// ```
/// use ratekit_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Strike must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Strike must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Calibration error kind.
///
/// Categorises the type of calibration failure.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalibrationErrorKind {
    /// Calibration did not converge within iteration limit.
    #[error("calibration did not converge")]
    NotConverged,

    /// Numerical instability during calibration.
    #[error("numerical instability")]
    NumericalInstability,

    /// Insufficient market data for calibration.
    #[error("insufficient data: need at least {need} quotes, got {got}")]
    InsufficientData {
        /// Number of quotes provided.
        got: usize,
        /// Minimum required quotes.
        need: usize,
    },

    /// Invalid market data or parameter value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Calibration error with detailed diagnostics.
///
/// Carries the failure kind together with the residual sum of squares,
/// iteration count, and the parameter values at the point of failure, so a
/// failed calibration can be diagnosed without re-running it.
///
/// # Examples
/// ```
/// use ratekit_core::types::CalibrationError;
///
/// let err = CalibrationError::not_converged(100, 0.01);
/// assert_eq!(err.iterations, 100);
/// assert!(err.is_not_converged());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationError {
    /// The type of calibration error.
    pub kind: CalibrationErrorKind,

    /// Final residual sum of squares.
    pub residual_ss: f64,

    /// Number of iterations performed.
    pub iterations: usize,

    /// Detailed error message.
    pub message: Option<String>,

    /// Final parameter values (if available).
    pub parameter_values: Option<Vec<f64>>,
}

impl CalibrationError {
    /// Create a new calibration error of the given kind.
    pub fn new(kind: CalibrationErrorKind) -> Self {
        Self {
            kind,
            residual_ss: f64::NAN,
            iterations: 0,
            message: None,
            parameter_values: None,
        }
    }

    /// Create a not-converged error.
    ///
    /// # Arguments
    /// * `iterations` - Number of iterations performed
    /// * `residual_ss` - Final residual sum of squares
    pub fn not_converged(iterations: usize, residual_ss: f64) -> Self {
        Self {
            kind: CalibrationErrorKind::NotConverged,
            residual_ss,
            iterations,
            message: Some(format!(
                "Failed to converge after {} iterations (residual_ss: {:.6e})",
                iterations, residual_ss
            )),
            parameter_values: None,
        }
    }

    /// Create a numerical instability error.
    pub fn numerical_instability(message: impl Into<String>) -> Self {
        Self {
            kind: CalibrationErrorKind::NumericalInstability,
            residual_ss: f64::NAN,
            iterations: 0,
            message: Some(message.into()),
            parameter_values: None,
        }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(got: usize, need: usize) -> Self {
        Self {
            kind: CalibrationErrorKind::InsufficientData { got, need },
            residual_ss: f64::NAN,
            iterations: 0,
            message: None,
            parameter_values: None,
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: CalibrationErrorKind::InvalidInput(msg.clone()),
            residual_ss: f64::NAN,
            iterations: 0,
            message: Some(msg),
            parameter_values: None,
        }
    }

    /// Attach the final parameter values.
    pub fn with_parameters(mut self, params: Vec<f64>) -> Self {
        self.parameter_values = Some(params);
        self
    }

    /// Attach the residual sum of squares.
    pub fn with_residual(mut self, residual_ss: f64) -> Self {
        self.residual_ss = residual_ss;
        self
    }

    /// Check if the error is due to non-convergence.
    pub fn is_not_converged(&self) -> bool {
        matches!(self.kind, CalibrationErrorKind::NotConverged)
    }

    /// Check if the error is due to numerical instability.
    pub fn is_numerical_instability(&self) -> bool {
        matches!(self.kind, CalibrationErrorKind::NumericalInstability)
    }
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Calibration error: {}", self.kind)?;
        if let Some(ref msg) = self.message {
            if !matches!(self.kind, CalibrationErrorKind::NotConverged) {
                write!(f, " - {}", msg)?;
            }
        }
        if self.iterations > 0 {
            write!(f, " (after {} iterations)", self.iterations)?;
        }
        if !self.residual_ss.is_nan() {
            write!(f, " [residual_ss: {:.6e}]", self.residual_ss)?;
        }
        Ok(())
    }
}

impl std::error::Error for CalibrationError {}

impl From<SolverError> for CalibrationError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::MaxIterationsExceeded { iterations } => {
                CalibrationError::not_converged(iterations, f64::NAN)
            }
            SolverError::NumericalInstability(msg) => CalibrationError::numerical_instability(msg),
            SolverError::NoBracket { a, b } => CalibrationError::numerical_instability(format!(
                "No bracket found between {} and {}",
                a, b
            )),
        }
    }
}
