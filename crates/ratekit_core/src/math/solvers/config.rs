//! Solver configuration types.

/// Configuration for root-finding algorithms.
///
/// # Example
///
/// ```
/// use ratekit_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Convergence tolerance.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: f64,

    /// Maximum number of iterations before giving up.
    ///
    /// Exceeding this limit yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    /// Default: tolerance 1e-10, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        assert!(tolerance > 0.0, "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _ = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _ = SolverConfig::new(1e-10, 0);
    }
}
