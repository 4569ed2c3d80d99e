//! Descriptive statistics over a sorted dataset
//!
//! Range, arithmetic mean, median, population variance, standard deviation
//! and the mode set, all computed from one [`Dataset`].
//!
//! # Example
//!
//! ```
//! use nbstats::Dataset;
//! use nbstats::statistics::StatisticsSummary;
//!
//! let dataset = Dataset::new(vec![5.0, 10.0, 15.0]).unwrap();
//! let summary = StatisticsSummary::compute(&dataset);
//!
//! println!("Mean: {}", summary.mean);
//! println!("Median: {}", summary.median);
//! println!("Stddev: {}", summary.std_dev);
//! ```

mod mode;
mod moments;

pub use mode::ModeSet;
pub use moments::Moments;

use crate::dataset::Dataset;
use crate::math::midpoint;

/// Summary statistics of a dataset
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatisticsSummary {
    /// Number of values
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Statistical median
    pub median: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub mode: ModeSet,
}

impl StatisticsSummary {
    /// Compute every statistic of `dataset`
    pub fn compute(dataset: &Dataset) -> Self {
        let sorted = dataset.as_slice();
        let moments = Moments::of(sorted);

        let summary = Self {
            count: dataset.len(),
            min: dataset.min(),
            max: dataset.max(),
            mean: moments.mean(),
            median: median(sorted),
            variance: moments.variance(),
            std_dev: moments.stddev(),
            mode: ModeSet::from_sorted(sorted),
        };

        tracing::debug!(
            count = summary.count,
            mean = summary.mean,
            median = summary.median,
            variance = summary.variance,
            modes = summary.mode.candidates().len(),
            "statistics computed"
        );

        summary
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Median of an ascending slice
///
/// Middle value for odd lengths, mean of the two middle values for even
/// lengths. Returns NaN for an empty slice.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => f64::NAN,
        _ if n % 2 == 0 => midpoint(sorted[n / 2 - 1], sorted[n / 2]),
        _ => sorted[n / 2],
    }
}
