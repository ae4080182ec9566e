//! Levenberg-Marquardt nonlinear least-squares solver.
//!
//! Solves `min_p ||f(p)||²` for a vector-valued residual function `f` by
//! blending Gauss-Newton steps with gradient descent:
//!
//! ```text
//! (JᵀJ + λI) δ = -Jᵀr
//! p ← p + δ
//! ```
//!
//! The damping factor `λ` is decreased after accepted steps and increased
//! after rejected ones. The Jacobian is computed by forward finite
//! differences.

use crate::types::SolverError;

/// Configuration for the Levenberg-Marquardt solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LMConfig {
    /// Convergence tolerance on the residual norm.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Initial damping factor.
    pub initial_lambda: f64,
    /// Factor applied to lambda on a rejected step.
    pub lambda_up: f64,
    /// Factor applied to lambda on an accepted step.
    pub lambda_down: f64,
    /// Minimum damping factor.
    pub min_lambda: f64,
    /// Maximum damping factor.
    pub max_lambda: f64,
    /// Tolerance on the relative parameter change.
    pub param_tolerance: f64,
}

impl Default for LMConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
            initial_lambda: 1e-3,
            lambda_up: 10.0,
            lambda_down: 0.1,
            min_lambda: 1e-10,
            max_lambda: 1e10,
            param_tolerance: 1e-10,
        }
    }
}

impl LMConfig {
    /// Create a configuration with the given tolerance and iteration limit.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }
}

/// Result of a Levenberg-Marquardt run.
#[derive(Debug, Clone, PartialEq)]
pub struct LMResult {
    /// Final optimised parameters.
    pub params: Vec<f64>,
    /// Final residual sum of squares.
    pub residual_ss: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether convergence was achieved.
    pub converged: bool,
}

impl LMResult {
    /// Root mean square error over `n_observations` residuals.
    pub fn rmse(&self, n_observations: usize) -> f64 {
        if n_observations == 0 {
            return 0.0;
        }
        (self.residual_ss / n_observations as f64).sqrt()
    }
}

/// Levenberg-Marquardt nonlinear least-squares solver.
///
/// Works in `f64`; generic parameter types are not needed at this layer.
///
/// # Example
///
/// ```
/// use ratekit_core::math::solvers::LevenbergMarquardtSolver;
///
/// // Fit y = a·exp(-b·x) to synthetic data with a = b = 1
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys: Vec<f64> = xs.iter().map(|x: &f64| (-x).exp()).collect();
///
/// let residuals = |p: &[f64]| -> Vec<f64> {
///     xs.iter().zip(&ys).map(|(&x, &y)| p[0] * (-p[1] * x).exp() - y).collect()
/// };
///
/// let solver = LevenbergMarquardtSolver::with_defaults();
/// let result = solver.solve(residuals, vec![0.5, 0.5]).unwrap();
/// assert!(result.converged);
/// assert!((result.params[0] - 1.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct LevenbergMarquardtSolver {
    config: LMConfig,
}

impl LevenbergMarquardtSolver {
    /// Create a new solver with the given configuration.
    pub fn new(config: LMConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: LMConfig::default(),
        }
    }

    /// Get the solver configuration.
    pub fn config(&self) -> &LMConfig {
        &self.config
    }

    /// Minimise the sum of squared residuals starting from `initial_params`.
    ///
    /// The returned [`LMResult`] carries `converged: false` when the
    /// iteration limit was reached; callers decide whether that is an error.
    ///
    /// # Errors
    ///
    /// * `SolverError::NumericalInstability` - Empty parameter or residual
    ///   vector, or non-finite residuals at the starting point
    pub fn solve<F>(&self, residuals: F, initial_params: Vec<f64>) -> Result<LMResult, SolverError>
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        let n_params = initial_params.len();
        if n_params == 0 {
            return Err(SolverError::NumericalInstability(
                "Empty parameter vector".to_string(),
            ));
        }

        let mut params = initial_params;
        let mut lambda = self.config.initial_lambda;

        let mut r = residuals(&params);
        if r.is_empty() {
            return Err(SolverError::NumericalInstability(
                "Empty residual vector".to_string(),
            ));
        }
        let mut ss = sum_of_squares(&r);
        if !ss.is_finite() {
            return Err(SolverError::NumericalInstability(
                "Non-finite residuals at initial parameters".to_string(),
            ));
        }

        for iteration in 0..self.config.max_iterations {
            if ss.sqrt() < self.config.tolerance {
                return Ok(LMResult {
                    params,
                    residual_ss: ss,
                    iterations: iteration,
                    converged: true,
                });
            }

            let jacobian = finite_difference_jacobian(&residuals, &params, &r);

            let delta = match normal_equations_step(&jacobian, &r, lambda, n_params) {
                Some(d) => d,
                None => {
                    lambda = (lambda * self.config.lambda_up).min(self.config.max_lambda);
                    continue;
                }
            };

            let step_norm = delta.iter().map(|d| d * d).sum::<f64>().sqrt();
            let param_norm = params.iter().map(|p| p * p).sum::<f64>().sqrt().max(1.0);
            if step_norm / param_norm < self.config.param_tolerance {
                return Ok(LMResult {
                    params,
                    residual_ss: ss,
                    iterations: iteration,
                    converged: true,
                });
            }

            let trial: Vec<f64> = params.iter().zip(&delta).map(|(p, d)| p + d).collect();
            let trial_r = residuals(&trial);
            let trial_ss = sum_of_squares(&trial_r);

            if trial_ss.is_finite() && trial_ss < ss {
                params = trial;
                r = trial_r;
                ss = trial_ss;
                lambda = (lambda * self.config.lambda_down).max(self.config.min_lambda);
            } else {
                lambda = (lambda * self.config.lambda_up).min(self.config.max_lambda);
            }
        }

        Ok(LMResult {
            params,
            residual_ss: ss,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }
}

/// Solve `(JᵀJ + λI) δ = -Jᵀr` for the trial step.
///
/// Returns `None` when the damped normal matrix is not positive definite.
fn normal_equations_step(
    jacobian: &[Vec<f64>],
    residuals: &[f64],
    lambda: f64,
    n_params: usize,
) -> Option<Vec<f64>> {
    let n_residuals = residuals.len();

    let mut jtj = vec![0.0; n_params * n_params];
    for i in 0..n_params {
        for j in i..n_params {
            let mut sum = 0.0;
            for k in 0..n_residuals {
                sum += jacobian[k][i] * jacobian[k][j];
            }
            jtj[i * n_params + j] = sum;
            jtj[j * n_params + i] = sum;
        }
    }
    for i in 0..n_params {
        jtj[i * n_params + i] += lambda;
    }

    let mut jtr = vec![0.0; n_params];
    for i in 0..n_params {
        let mut sum = 0.0;
        for k in 0..n_residuals {
            sum += jacobian[k][i] * residuals[k];
        }
        jtr[i] = -sum;
    }

    solve_cholesky(&jtj, &jtr, n_params)
}

/// Forward finite-difference Jacobian, one column per parameter.
fn finite_difference_jacobian<F>(residuals: &F, params: &[f64], r0: &[f64]) -> Vec<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let n_params = params.len();
    let n_residuals = r0.len();
    let eps = 1e-8;

    let mut jacobian = vec![vec![0.0; n_params]; n_residuals];

    for j in 0..n_params {
        let h = eps * params[j].abs().max(1.0);

        let mut bumped = params.to_vec();
        bumped[j] += h;
        let r_bumped = residuals(&bumped);

        for i in 0..n_residuals {
            jacobian[i][j] = (r_bumped[i] - r0[i]) / h;
        }
    }

    jacobian
}

#[inline]
fn sum_of_squares(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Solve `Ax = b` for symmetric positive-definite `A` (row-major, n×n)
/// via Cholesky decomposition.
fn solve_cholesky(a: &[f64], b: &[f64], n: usize) -> Option<Vec<f64>> {
    if n == 0 || a.len() != n * n {
        return None;
    }

    // A = L·Lᵀ
    let mut l = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i * n + j];
            for k in 0..j {
                sum -= l[i * n + k] * l[j * n + k];
            }
            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[i * n + j] = sum.sqrt();
            } else {
                if l[j * n + j].abs() < 1e-30 {
                    return None;
                }
                l[i * n + j] = sum / l[j * n + j];
            }
        }
    }

    // Forward substitution: L·y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i * n + j] * y[j];
        }
        y[i] = sum / l[i * n + i];
    }

    // Backward substitution: Lᵀ·x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j * n + i] * x[j];
        }
        x[i] = sum / l[i * n + i];
    }

    Some(x)
}
