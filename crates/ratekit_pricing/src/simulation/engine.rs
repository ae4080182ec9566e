//! The Euler-Maruyama path generator.

use rayon::prelude::*;

use ratekit_core::market_data::DiscountCurve;
use ratekit_models::hull_white::HullWhiteModel;

use crate::rng::SimulationRng;

use super::scenario::SimulationScenario;
use super::shocks::ShockMatrix;
use super::SimulationError;

/// Simulated short-rate paths on a uniform time grid.
///
/// Paths are stored timestep-major: `num_timesteps` rows of `num_paths`
/// rates, so a cross-section at a date is a contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    time_grid: Vec<f64>,
    paths: Vec<f64>,
    num_paths: usize,
}

impl SimulationResult {
    /// The simulation time grid `t_i = i * dt`.
    pub fn time_grid(&self) -> &[f64] {
        &self.time_grid
    }

    /// Number of grid points including `t = 0`.
    pub fn num_timesteps(&self) -> usize {
        self.time_grid.len()
    }

    /// Number of simulated paths.
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// The short rates across all paths at grid point `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step >= num_timesteps()`.
    pub fn timestep(&self, step: usize) -> &[f64] {
        let start = step * self.num_paths;
        &self.paths[start..start + self.num_paths]
    }

    /// The full trajectory of a single path, gathered across timesteps.
    ///
    /// # Panics
    ///
    /// Panics if `path >= num_paths()`.
    pub fn path(&self, path: usize) -> Vec<f64> {
        assert!(path < self.num_paths, "path index out of range");
        (0..self.num_timesteps())
            .map(|step| self.paths[step * self.num_paths + path])
            .collect()
    }

    /// Terminal short rates, one per path.
    pub fn terminal_rates(&self) -> &[f64] {
        self.timestep(self.num_timesteps() - 1)
    }
}

/// Euler-Maruyama simulator for the Hull-White short rate:
///
/// `r_{i+1} = r_i + (theta(t_i) - a * r_i) * dt + sigma * sqrt(dt) * Z`
///
/// Every path starts from the curve-implied rate `r(0) = f(0, 0+)`. The
/// drift `theta` is evaluated once on the grid, then paths are generated
/// in parallel. Rates are not floored: the model admits negative rates.
#[derive(Debug, Clone)]
pub struct ShortRateSimulator<C: DiscountCurve> {
    model: HullWhiteModel<C>,
}

impl<C: DiscountCurve + Sync> ShortRateSimulator<C> {
    /// Wraps a fitted model for simulation.
    pub fn new(model: HullWhiteModel<C>) -> Self {
        Self { model }
    }

    /// The model being simulated.
    pub fn model(&self) -> &HullWhiteModel<C> {
        &self.model
    }

    /// Runs the simulation with shocks drawn from the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] for an invalid scenario or a curve
    /// failure while fitting the drift.
    pub fn simulate_seeded(
        &self,
        scenario: &SimulationScenario,
        seed: u64,
    ) -> Result<SimulationResult, SimulationError> {
        scenario.validate()?;
        let mut rng = SimulationRng::from_seed(seed);
        let shocks = ShockMatrix::from_rng(scenario, &mut rng);
        self.simulate(scenario, &shocks)
    }

    /// Runs the simulation with caller-supplied shocks.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ShockShape`] when the matrix does not
    /// match the scenario dimensions, [`SimulationError::InvalidScenario`]
    /// for bad dimensions, or a curve error from the drift fit.
    pub fn simulate(
        &self,
        scenario: &SimulationScenario,
        shocks: &ShockMatrix,
    ) -> Result<SimulationResult, SimulationError> {
        scenario.validate()?;

        let num_timesteps = scenario.num_timesteps();
        let num_paths = scenario.num_paths;
        let num_steps = num_timesteps - 1;

        if shocks.num_steps() != num_steps || shocks.num_paths() != num_paths {
            return Err(SimulationError::ShockShape {
                expected_rows: num_steps,
                expected_cols: num_paths,
                got_rows: shocks.num_steps(),
                got_cols: shocks.num_paths(),
            });
        }

        let time_grid = scenario.time_grid();
        let r0 = self.model.short_rate_at_origin()?;
        let theta_grid = self.model.theta().eval_grid(&time_grid[..num_steps])?;

        let a = self.model.a();
        let sigma = self.model.sigma();
        let dt = scenario.dt;
        let vol_step = sigma * dt.sqrt();

        // Each path is independent given its shock column; generate them
        // path-major in parallel, then transpose once.
        let columns: Vec<Vec<f64>> = (0..num_paths)
            .into_par_iter()
            .map(|path| {
                let mut rates = Vec::with_capacity(num_timesteps);
                let mut r = r0;
                rates.push(r);
                for step in 0..num_steps {
                    let z = shocks.row(step)[path];
                    r += (theta_grid[step] - a * r) * dt + vol_step * z;
                    rates.push(r);
                }
                rates
            })
            .collect();

        let mut paths = vec![0.0; num_timesteps * num_paths];
        for (path, column) in columns.iter().enumerate() {
            for (step, &rate) in column.iter().enumerate() {
                paths[step * num_paths + path] = rate;
            }
        }

        Ok(SimulationResult {
            time_grid,
            paths,
            num_paths,
        })
    }
}
