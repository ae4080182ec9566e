//! Brent's method root finder.

use super::SolverConfig;
use crate::types::SolverError;

/// Brent's method root finder.
///
/// Combines bisection, the secant method, and inverse quadratic
/// interpolation. Converges for any continuous function given a valid
/// bracket, without requiring derivatives.
///
/// # Example
///
/// ```
/// use ratekit_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
/// let root = solver.find_root(|x| x * x * x - x - 2.0, 1.0, 2.0).unwrap();
/// assert!((root * root * root - root - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver {
    config: SolverConfig,
}

impl BrentSolver {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// Requires `f(a)` and `f(b)` to have opposite signs.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::NoBracket)` - Same sign at both endpoints
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, a: f64, b: f64) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa * fb > 0.0 {
            return Err(SolverError::NoBracket { a, b });
        }

        // Keep |f(b)| <= |f(a)| so b is the current best estimate
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        let tol = self.config.tolerance;

        for _ in 0..self.config.max_iterations {
            if fb.abs() < tol {
                return Ok(b);
            }

            let m = 0.5 * (c - b);
            if m.abs() <= tol {
                return Ok(b);
            }

            // Try inverse quadratic interpolation, then secant; fall back
            // to bisection when the interpolated step is not trustworthy.
            let (p, q) = if fa != fc && fb != fc {
                let r = fb / fc;
                let s = fb / fa;
                let t = fa / fc;
                (
                    s * (t * (r - t) * (c - b) - (1.0 - r) * (b - a)),
                    (t - 1.0) * (r - 1.0) * (s - 1.0),
                )
            } else if fb != fa {
                let s = fb / fa;
                (2.0 * m * s, 1.0 - s)
            } else {
                (0.0, 0.0)
            };

            let interpolation_ok = q != 0.0
                && p.abs() < (1.5 * m * q).abs()
                && p.abs() < (0.5 * e * q).abs();

            if interpolation_ok {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b += d;
            } else {
                b += if m > 0.0 { tol } else { -tol };
            }
            fb = f(b);

            // Re-bracket when b and c landed on the same side of the root
            if fb * fc > 0.0 {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_find_sin_root() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x: f64| x.sin(), 3.0, 4.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_find_exp_root() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
        assert!((root - 2.0_f64.ln()).abs() < 1e-10);
    }

    #[test]
    fn test_bracket_reversed() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x| x * x - 2.0, 2.0, 0.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_root_at_endpoint() {
        let solver = BrentSolver::with_defaults();
        let root = solver.find_root(|x| x - 1.0, 0.0, 1.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_bracket() {
        let solver = BrentSolver::with_defaults();
        let result = solver.find_root(|x| x * x + 1.0, -1.0, 1.0);
        match result.unwrap_err() {
            SolverError::NoBracket { a, b } => {
                assert!((a - (-1.0)).abs() < 1e-10);
                assert!((b - 1.0).abs() < 1e-10);
            }
            other => panic!("Expected NoBracket error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = BrentSolver::new(SolverConfig::new(1e-100, 3));
        let result = solver.find_root(|x| x * x - 2.0, 0.0, 2.0);
        match result.unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => assert_eq!(iterations, 3),
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_difficult_function() {
        let solver = BrentSolver::with_defaults();
        let f = |x: f64| x - x.cos();
        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert!(f(root).abs() < 1e-10);
    }

    #[test]
    fn test_achieves_tolerance() {
        let tol = 1e-12;
        let solver = BrentSolver::new(SolverConfig::new(tol, 100));
        let f = |x: f64| x * x - 2.0;
        let root = solver.find_root(f, 0.0, 2.0).unwrap();
        assert!(f(root).abs() < tol);
    }
}
