//! Root-finding and least-squares solvers.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing root finder without derivatives
//! - [`LevenbergMarquardtSolver`]: Nonlinear least squares for calibration
//!
//! Root finding uses [`SolverConfig`] (tolerance, iteration limit); the LM
//! solver uses [`LMConfig`] with additional damping-control parameters.
//!
//! ## Examples
//!
//! ```
//! use ratekit_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```
//!
//! ```
//! use ratekit_core::math::solvers::LevenbergMarquardtSolver;
//!
//! // Minimise (p[0] - 2)² + (p[1] - 3)²
//! let residuals = |params: &[f64]| -> Vec<f64> {
//!     vec![params[0] - 2.0, params[1] - 3.0]
//! };
//!
//! let solver = LevenbergMarquardtSolver::with_defaults();
//! let result = solver.solve(residuals, vec![0.0, 0.0]).unwrap();
//! assert!(result.converged);
//! ```

mod brent;
mod config;
mod levenberg_marquardt;

pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use levenberg_marquardt::{LMConfig, LMResult, LevenbergMarquardtSolver};
