//! Mean, population variance and standard deviation
//!
//! Two passes over the data: a compensated sum for the mean, then a
//! compensated sum of squared deviations from it. Both passes run on values
//! divided by a power of two near the largest magnitude, so values close to
//! `f64::MAX` cannot overflow the running sums.

use crate::math::{compensated_sum, power_of_two_scale};

/// First and second moments of a value slice
///
/// # Example
///
/// ```
/// use nbstats::statistics::Moments;
///
/// let moments = Moments::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
///
/// assert!((moments.mean() - 5.0).abs() < 1e-12);
/// assert!((moments.variance() - 4.0).abs() < 1e-12);
/// assert!((moments.stddev() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    count: usize,
    mean: f64,
    variance: f64,
}

impl Moments {
    /// Compute the moments of `values`; all zero when empty
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                variance: 0.0,
            };
        }

        let n = values.len() as f64;
        let scale = power_of_two_scale(values);

        let mean = compensated_sum(values.iter().map(|&x| x / scale)) / n;
        let squared = compensated_sum(values.iter().map(|&x| {
            let d = x / scale - mean;
            d * d
        }));

        Self {
            count: values.len(),
            mean: mean * scale,
            // Only overflows when the true variance exceeds f64::MAX
            variance: squared / n * scale * scale,
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (divides by N)
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Square root of the population variance
    pub fn stddev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Sum of all values
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }
}
