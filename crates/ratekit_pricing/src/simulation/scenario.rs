//! Simulation scenario description.

use super::SimulationError;

/// Dimensions of a Monte Carlo run: how many paths, for how long, at
/// what resolution.
///
/// The time grid is `t_i = i * dt` for `i = 0..num_timesteps` with
/// `num_timesteps = floor(time_horizon / dt) + 1`, so the grid never
/// oversteps the horizon even when `dt` does not divide it exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationScenario {
    /// Number of independent paths.
    pub num_paths: usize,
    /// Simulation horizon in years.
    pub time_horizon: f64,
    /// Timestep in years.
    pub dt: f64,
}

impl SimulationScenario {
    /// Creates a scenario after validating its dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidScenario`] when any dimension
    /// is non-positive or `dt` exceeds the horizon.
    pub fn new(num_paths: usize, time_horizon: f64, dt: f64) -> Result<Self, SimulationError> {
        let scenario = Self {
            num_paths,
            time_horizon,
            dt,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the scenario invariants. Called by [`Self::new`] and again
    /// by the engine, since the fields are public.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_paths == 0 {
            return Err(SimulationError::InvalidScenario(
                "num_paths must be at least 1".to_string(),
            ));
        }
        if !self.time_horizon.is_finite() || self.time_horizon <= 0.0 {
            return Err(SimulationError::InvalidScenario(format!(
                "time horizon must be strictly positive, got {}",
                self.time_horizon
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidScenario(format!(
                "dt must be strictly positive, got {}",
                self.dt
            )));
        }
        if self.dt > self.time_horizon {
            return Err(SimulationError::InvalidScenario(format!(
                "dt {} exceeds time horizon {}",
                self.dt, self.time_horizon
            )));
        }
        Ok(())
    }

    /// Number of grid points including `t = 0`.
    pub fn num_timesteps(&self) -> usize {
        (self.time_horizon / self.dt).floor() as usize + 1
    }

    /// The simulation time grid `t_i = i * dt`.
    pub fn time_grid(&self) -> Vec<f64> {
        (0..self.num_timesteps()).map(|i| i as f64 * self.dt).collect()
    }
}
