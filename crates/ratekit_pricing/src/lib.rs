//! Monte Carlo simulation and the end-to-end Hull-White facade.
//!
//! This crate sits on top of [`ratekit_core`] (curves, solvers) and
//! [`ratekit_models`] (analytical pricing, calibration) and adds:
//!
//! - **Simulation**: Euler-Maruyama short-rate paths under the fitted
//!   Hull-White dynamics, parallelised across paths with `rayon`.
//! - **Reproducible randomness**: a seedable RNG wrapper and an
//!   injectable shock matrix so runs can be replayed exactly.
//! - **The model facade**: [`HullWhiteOneFactor`] implements
//!   [`ratekit_core::traits::RiskFactorModel`], wiring calibration and
//!   simulation into a single capability object.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ratekit_core::market_data::FlatCurve;
//! use ratekit_models::hull_white::HullWhiteModel;
//! use ratekit_pricing::simulation::{ShortRateSimulator, SimulationScenario};
//!
//! let model = HullWhiteModel::new(0.1, 0.01, Arc::new(FlatCurve::new(0.03))).unwrap();
//! let scenario = SimulationScenario::new(100, 1.0, 0.01).unwrap();
//!
//! let result = ShortRateSimulator::new(model)
//!     .simulate_seeded(&scenario, 42)
//!     .unwrap();
//! assert_eq!(result.num_timesteps(), 101);
//! assert_eq!(result.num_paths(), 100);
//! ```

#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod model;
pub mod rng;
pub mod simulation;

pub use model::{HullWhiteOneFactor, ModelError};
