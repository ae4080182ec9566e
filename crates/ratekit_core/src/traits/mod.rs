//! Core traits for calibration and risk-factor models.

pub mod calibration;
pub mod model;

pub use calibration::{CalibrationConfig, CalibrationResult, ParameterBounds};
pub use model::RiskFactorModel;
