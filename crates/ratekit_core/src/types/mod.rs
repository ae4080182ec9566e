//! Core type definitions.
//!
//! Currently contains the shared error taxonomy used across the workspace.

mod error;

pub use error::{
    CalibrationError, CalibrationErrorKind, InterpolationError, PricingError, SolverError,
};
