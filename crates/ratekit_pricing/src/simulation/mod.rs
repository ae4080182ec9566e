//! Euler-Maruyama simulation of Hull-White short-rate paths.

mod engine;
mod scenario;
mod shocks;

pub use engine::{ShortRateSimulator, SimulationResult};
pub use scenario::SimulationScenario;
pub use shocks::ShockMatrix;

use ratekit_core::market_data::CurveError;
use thiserror::Error;

/// Errors raised while setting up or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Scenario parameters are out of range.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// An injected shock matrix does not match the scenario dimensions.
    #[error(
        "shock matrix shape mismatch: expected {expected_rows}x{expected_cols}, \
         got {got_rows}x{got_cols}"
    )]
    ShockShape {
        /// Required number of shock rows, `num_timesteps - 1`.
        expected_rows: usize,
        /// Required number of shock columns, `num_paths`.
        expected_cols: usize,
        /// Rows provided.
        got_rows: usize,
        /// Columns provided.
        got_cols: usize,
    },

    /// A curve lookup failed while fitting the drift.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),
}
