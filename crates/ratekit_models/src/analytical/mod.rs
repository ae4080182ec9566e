//! Closed-form building blocks shared by the analytical pricers.

mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
