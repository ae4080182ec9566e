//! Standard-normal shock matrices, injectable or seeded.

use crate::rng::SimulationRng;

use super::scenario::SimulationScenario;
use super::SimulationError;

/// The Brownian increments driving a simulation, stored row-major as
/// `(num_timesteps - 1)` rows of `num_paths` standard normals.
///
/// Callers can inject their own matrix (for antithetic or
/// quasi-random schemes, or for deterministic tests) or draw one from a
/// seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockMatrix {
    data: Vec<f64>,
    num_steps: usize,
    num_paths: usize,
}

impl ShockMatrix {
    /// Draws a matrix of the scenario's dimensions from a seeded RNG.
    pub fn from_rng(scenario: &SimulationScenario, rng: &mut SimulationRng) -> Self {
        let num_steps = scenario.num_timesteps() - 1;
        let num_paths = scenario.num_paths;
        let mut data = vec![0.0; num_steps * num_paths];
        rng.fill_normal(&mut data);
        Self {
            data,
            num_steps,
            num_paths,
        }
    }

    /// Builds a matrix from caller-supplied rows, one per timestep.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ShockShape`] when the rows do not form
    /// a `(num_timesteps - 1) x num_paths` matrix for the scenario.
    pub fn from_rows(
        scenario: &SimulationScenario,
        rows: &[Vec<f64>],
    ) -> Result<Self, SimulationError> {
        let expected_rows = scenario.num_timesteps() - 1;
        let expected_cols = scenario.num_paths;
        let got_rows = rows.len();
        let got_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

        let ragged = rows.iter().any(|row| row.len() != expected_cols);
        if got_rows != expected_rows || ragged {
            return Err(SimulationError::ShockShape {
                expected_rows,
                expected_cols,
                got_rows,
                got_cols,
            });
        }

        let mut data = Vec::with_capacity(expected_rows * expected_cols);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            num_steps: expected_rows,
            num_paths: expected_cols,
        })
    }

    /// An all-zero matrix; paths collapse to the deterministic drift.
    pub fn zeros(scenario: &SimulationScenario) -> Self {
        let num_steps = scenario.num_timesteps() - 1;
        let num_paths = scenario.num_paths;
        Self {
            data: vec![0.0; num_steps * num_paths],
            num_steps,
            num_paths,
        }
    }

    /// Number of shock rows, `num_timesteps - 1`.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Number of paths.
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// The shocks applied at step `step`, one per path.
    pub fn row(&self, step: usize) -> &[f64] {
        let start = step * self.num_paths;
        &self.data[start..start + self.num_paths]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> SimulationScenario {
        SimulationScenario::new(4, 1.0, 0.25).unwrap()
    }

    #[test]
    fn seeded_matrix_has_scenario_shape() {
        let scenario = scenario();
        let mut rng = SimulationRng::from_seed(1);
        let shocks = ShockMatrix::from_rng(&scenario, &mut rng);
        assert_eq!(shocks.num_steps(), 4);
        assert_eq!(shocks.num_paths(), 4);
        assert_eq!(shocks.row(3).len(), 4);
    }

    #[test]
    fn seeded_matrix_is_reproducible() {
        let scenario = scenario();
        let a = ShockMatrix::from_rng(&scenario, &mut SimulationRng::from_seed(5));
        let b = ShockMatrix::from_rng(&scenario, &mut SimulationRng::from_seed(5));
        assert_eq!(a, b);
    }

    #[test]
    fn injected_rows_are_accepted_when_shapes_match() {
        let scenario = scenario();
        let rows = vec![vec![0.1, -0.2, 0.3, 0.0]; 4];
        let shocks = ShockMatrix::from_rows(&scenario, &rows).unwrap();
        assert_eq!(shocks.row(0), &[0.1, -0.2, 0.3, 0.0]);
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let scenario = scenario();
        let rows = vec![vec![0.0; 4]; 3];
        let err = ShockMatrix::from_rows(&scenario, &rows).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::ShockShape {
                expected_rows: 4,
                got_rows: 3,
                ..
            }
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let scenario = scenario();
        let mut rows = vec![vec![0.0; 4]; 4];
        rows[2].pop();
        assert!(ShockMatrix::from_rows(&scenario, &rows).is_err());
    }

    #[test]
    fn zeros_matrix_is_all_zero() {
        let scenario = scenario();
        let shocks = ShockMatrix::zeros(&scenario);
        for step in 0..shocks.num_steps() {
            assert!(shocks.row(step).iter().all(|&z| z == 0.0));
        }
    }
}
