//! The sorted, explicit-length value sequence every stage reads from

use crate::error::{NbError, Result};
use crate::tokenizer::Extraction;

/// Sorted, non-empty sequence of finite, non-negative values
///
/// Built once and never modified. Zero is an ordinary member; the length is
/// always carried explicitly.
///
/// # Example
///
/// ```
/// use nbstats::Dataset;
///
/// let dataset = Dataset::new(vec![15.0, 5.0, 10.0]).unwrap();
///
/// assert_eq!(dataset.as_slice(), &[5.0, 10.0, 15.0]);
/// assert_eq!(dataset.min(), 5.0);
/// assert_eq!(dataset.max(), 15.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Sort `values` ascending and wrap them
    ///
    /// Negative, NaN and infinite values are dropped, the same values the
    /// tokenizer never accepts. Fails with [`NbError::EmptyInput`] when
    /// nothing remains.
    pub fn new(mut values: Vec<f64>) -> Result<Self> {
        values.retain(|v| v.is_finite() && *v >= 0.0);
        if values.is_empty() {
            return Err(NbError::EmptyInput);
        }

        values.sort_by(f64::total_cmp);
        Ok(Self { values })
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl TryFrom<Extraction> for Dataset {
    type Error = NbError;

    fn try_from(extraction: Extraction) -> Result<Self> {
        let (values, _) = extraction.into_parts();
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_on_construction() {
        let dataset = Dataset::new(vec![3.0, 1.0, 2.0, 0.0]).unwrap();
        assert_eq!(dataset.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_sort_idempotent() {
        let once = Dataset::new(vec![9.0, 0.5, 4.0, 4.0, 1e6]).unwrap();
        let twice = Dataset::new(once.clone().into_vec()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_is_a_member() {
        // A zero in the middle must not end the sequence
        let dataset = Dataset::new(vec![5.0, 0.0, 7.0]).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.min(), 0.0);
        assert_eq!(dataset.max(), 7.0);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Dataset::new(Vec::new()), Err(NbError::EmptyInput)));
        assert!(matches!(
            Dataset::new(vec![f64::NAN, f64::INFINITY]),
            Err(NbError::EmptyInput)
        ));
    }

    #[test]
    fn test_negative_dropped() {
        let dataset = Dataset::new(vec![3.0, -1.0, -0.5, 0.0]).unwrap();
        assert_eq!(dataset.as_slice(), &[0.0, 3.0]);
        assert!(matches!(Dataset::new(vec![-2.0]), Err(NbError::EmptyInput)));
    }

    #[test]
    fn test_non_finite_dropped() {
        let dataset = Dataset::new(vec![2.0, f64::NAN, 1.0]).unwrap();
        assert_eq!(dataset.as_slice(), &[1.0, 2.0]);
    }
}
