//! Hull-White one-factor short-rate model.
//!
//! The short rate follows `dr = (theta(t) - a * r) dt + sigma dW` under
//! the risk-neutral measure. The module is organised as:
//!
//! - [`term_structure`]: the `theta(t)` drift that fits an observed
//!   discount curve.
//! - [`instruments`]: European swaption descriptions and market quotes.
//! - [`model`]: the [`HullWhiteModel`] parameter bundle and its
//!   analytical pricing methods (bonds, bond options, swaptions).
//! - [`calibration`]: least-squares recovery of `(a, sigma)` from
//!   swaption quotes.

pub mod calibration;
pub mod instruments;
pub mod model;
pub mod term_structure;

mod pricing;

pub use calibration::{HullWhiteCalibrator, HullWhiteMarketData};
pub use instruments::{EuropeanSwaption, MarketSwaption, OptionType, SwaptionStyle};
pub use model::HullWhiteModel;
pub use pricing::b_factor;
pub use term_structure::ThetaFunction;
