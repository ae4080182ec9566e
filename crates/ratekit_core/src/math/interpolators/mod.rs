//! Interpolation methods for curve construction.
//!
//! Provides the [`Interpolator`] trait and a natural cubic spline
//! implementation, generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use ratekit_core::math::interpolators::{Interpolator, CubicSpline};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [1.0, 0.95, 0.90, 0.86];
//!
//! let spline = CubicSpline::new(&xs, &ys).unwrap();
//! assert_eq!(spline.domain(), (0.0, 3.0));
//!
//! let y = spline.interpolate(1.5).unwrap();
//! assert!(y < 0.95 && y > 0.90);
//! ```

mod cubic_spline;
mod traits;

pub use cubic_spline::CubicSpline;
pub use traits::Interpolator;
