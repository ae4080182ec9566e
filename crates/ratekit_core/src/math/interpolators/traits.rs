//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for one-dimensional interpolators.
///
/// # Contract
///
/// - `interpolate(x)` computes the interpolated value at `x`
/// - `domain()` returns the `(min, max)` range covered by the data points
///
/// Implementations decide how queries outside the domain are handled:
/// they may fail with [`InterpolationError::OutOfBounds`] or extrapolate.
pub trait Interpolator<T: Float> {
    /// Interpolate the value at point `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the `(min, max)` domain spanned by the data points.
    fn domain(&self) -> (T, T);
}
