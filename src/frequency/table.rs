//! Leading-digit frequency table

use super::leading_digit::leading_digit;
use crate::dataset::Dataset;

/// Number of leading-digit buckets (digits 1 to 9)
pub const DIGITS: usize = 9;

/// Actual frequency (percent) from which the chart switches to a 0-100 scale
pub const HALF_SCALE_LIMIT: f64 = 50.0;

/// Actual frequency (percent) above which a bucket counts as saturated
pub const SATURATION_LIMIT: f64 = 99.0;

/// Expected percentage of each leading digit under the Newcomb-Benford law
///
/// `100 * (log10(d + 1) - log10(d))` for `d` in `1..=9`.
pub fn expected_percentages() -> [f64; DIGITS] {
    core::array::from_fn(|i| {
        let d = (i + 1) as f64;
        100.0 * ((d + 1.0).log10() - d.log10())
    })
}

/// Raw, expected and actual leading-digit frequencies
///
/// Index `i` of every array holds digit `i + 1`.
///
/// # Example
///
/// ```
/// use nbstats::Dataset;
/// use nbstats::frequency::FrequencyTable;
///
/// let dataset = Dataset::new(vec![5.0, 10.0, 15.0]).unwrap();
/// let table = FrequencyTable::from_dataset(&dataset);
///
/// assert_eq!(table.raw[0], 2);
/// assert_eq!(table.raw[4], 1);
/// assert!((table.actual[0] - 66.67).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrequencyTable {
    /// Count of values per leading digit
    pub raw: [u64; DIGITS],
    /// Newcomb-Benford expected percentage per digit
    pub expected: [f64; DIGITS],
    /// Observed percentage per digit, relative to the dataset size
    pub actual: [f64; DIGITS],
    /// Some bucket reached 50%
    pub exceeds_half: bool,
    /// Some bucket is above 99%
    pub saturated: bool,
}

impl FrequencyTable {
    /// Bucket every value of `dataset` by its leading digit
    ///
    /// Zeros have no leading digit; they are left out of every bucket but still
    /// count toward the dataset size.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut raw = [0u64; DIGITS];
        for digit in dataset.iter().filter_map(leading_digit) {
            raw[usize::from(digit) - 1] += 1;
        }
        Self::from_counts(raw, dataset.len())
    }

    /// Build the table from raw bucket counts over `population` values
    pub fn from_counts(raw: [u64; DIGITS], population: usize) -> Self {
        let n = population.max(1) as f64;
        let actual = raw.map(|count| 100.0 * count as f64 / n);

        Self {
            raw,
            expected: expected_percentages(),
            actual,
            exceeds_half: actual.iter().any(|&a| a >= HALF_SCALE_LIMIT),
            saturated: actual.iter().any(|&a| a > SATURATION_LIMIT),
        }
    }

    /// Values that received a leading digit
    pub fn bucketed(&self) -> u64 {
        self.raw.iter().sum()
    }

    /// Iterate `(digit, raw, expected, actual)` rows
    pub fn rows(&self) -> impl Iterator<Item = (u8, u64, f64, f64)> + '_ {
        (0..DIGITS).map(move |i| (i as u8 + 1, self.raw[i], self.expected[i], self.actual[i]))
    }
}
