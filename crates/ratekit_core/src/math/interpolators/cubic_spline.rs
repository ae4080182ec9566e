//! Natural cubic spline interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Natural cubic spline interpolator with C² continuity.
///
/// Stores sorted (x, y) data points together with the second derivatives at
/// the knots, obtained by solving the natural-spline tridiagonal system with
/// the Thomas algorithm. The second derivative is zero at both boundaries.
///
/// With two data points the spline degenerates to the straight line through
/// them.
///
/// # Extrapolation
///
/// By default, queries outside the data range fail with
/// [`InterpolationError::OutOfBounds`]. A spline built with
/// [`CubicSpline::extrapolating`] instead evaluates the boundary segment
/// polynomial outside the range, which is what curve bump-and-reprice
/// calculus at the domain edges needs.
///
/// # Example
///
/// ```
/// use ratekit_core::math::interpolators::{Interpolator, CubicSpline};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(&xs, &ys).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<T: Float> {
    /// Sorted x-coordinates.
    xs: Vec<T>,
    /// y-values, ordered like `xs`.
    ys: Vec<T>,
    /// Second derivatives at the knots (zero at both ends).
    m: Vec<T>,
    /// Whether queries outside the domain use the boundary polynomial.
    extrapolate: bool,
}

impl<T: Float> CubicSpline<T> {
    /// Construct a natural cubic spline from x and y data points.
    ///
    /// Data points are sorted by x-coordinate during construction. At least
    /// two points with distinct x-coordinates are required.
    ///
    /// # Returns
    ///
    /// * `Ok(CubicSpline)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or
    ///   duplicate x-coordinates
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::build(xs, ys, false)
    }

    /// Construct a spline that extrapolates outside the data range with the
    /// boundary segment polynomial.
    pub fn extrapolating(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::build(xs, ys, true)
    }

    fn build(xs: &[T], ys: &[T], extrapolate: bool) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        for window in pairs.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(InterpolationError::InvalidInput(format!(
                    "duplicate x-coordinate: {}",
                    window[0].0.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();
        let m = Self::second_derivatives(&sorted_xs, &sorted_ys);

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            m,
            extrapolate,
        })
    }

    /// Solve the natural-spline tridiagonal system for the knot second
    /// derivatives using the Thomas algorithm.
    fn second_derivatives(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        let mut m = vec![T::zero(); n];
        let interior = n - 2;
        if interior == 0 {
            // Two points: the natural spline is linear, m stays zero.
            return m;
        }

        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

        // Interior equation j (knot i = j + 1):
        //   h[j]*m[i-1] + 2*(h[j]+h[j+1])*m[i] + h[j+1]*m[i+1] = rhs[j]
        // with m[0] = m[n-1] = 0 (natural boundary).
        let mut c_prime: Vec<T> = Vec::with_capacity(interior);
        let mut d_prime: Vec<T> = Vec::with_capacity(interior);

        for j in 0..interior {
            let i = j + 1;
            let diag = two * (h[j] + h[j + 1]);
            let rhs = six * ((ys[i + 1] - ys[i]) / h[j + 1] - (ys[i] - ys[i - 1]) / h[j]);

            if j == 0 {
                c_prime.push(h[j + 1] / diag);
                d_prime.push(rhs / diag);
            } else {
                let denom = diag - h[j] * c_prime[j - 1];
                c_prime.push(h[j + 1] / denom);
                d_prime.push((rhs - h[j] * d_prime[j - 1]) / denom);
            }
        }

        m[interior] = d_prime[interior - 1];
        for j in (0..interior - 1).rev() {
            m[j + 1] = d_prime[j] - c_prime[j] * m[j + 2];
        }

        m
    }

    /// Find the segment index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to the valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Evaluate the cubic polynomial of segment `i` at `x`.
    #[inline]
    fn eval_segment(&self, i: usize, x: T) -> T {
        let six = T::from(6.0).unwrap();
        let h = self.xs[i + 1] - self.xs[i];
        let dl = x - self.xs[i];
        let dr = self.xs[i + 1] - x;

        self.m[i] * dr * dr * dr / (six * h)
            + self.m[i + 1] * dl * dl * dl / (six * h)
            + (self.ys[i] / h - self.m[i] * h / six) * dr
            + (self.ys[i + 1] / h - self.m[i + 1] * h / six) * dl
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for CubicSpline<T> {
    /// Interpolate the value at point `x`.
    ///
    /// Uses binary search (O(log n)) to find the segment, then evaluates
    /// its cubic polynomial. Outside the domain, either extrapolates with
    /// the boundary polynomial or fails, depending on construction.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let x_min = self.xs[0];
        let x_max = self.xs[self.xs.len() - 1];

        if !self.extrapolate && (x < x_min || x > x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        Ok(self.eval_segment(i, x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
