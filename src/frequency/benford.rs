//! Newcomb-Benford conformance score

use core::fmt;

use super::table::{FrequencyTable, DIGITS};

/// Strength of the relationship between a dataset and the Newcomb-Benford law
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Conformance {
    /// Deviation below 0.1
    VeryStrong,
    /// Deviation in `[0.1, 0.2)`
    Strong,
    /// Deviation in `[0.2, 0.35)`
    Moderate,
    /// Deviation in `[0.35, 0.5)`
    Weak,
    /// Deviation of 0.5 or more
    NoRelationship,
}

impl Conformance {
    /// Classify an NB deviation
    pub fn from_deviation(deviation: f64) -> Self {
        match deviation {
            d if d < 0.1 => Conformance::VeryStrong,
            d if d < 0.2 => Conformance::Strong,
            d if d < 0.35 => Conformance::Moderate,
            d if d < 0.5 => Conformance::Weak,
            _ => Conformance::NoRelationship,
        }
    }

    /// Sentence describing the relationship
    pub fn sentence(&self) -> &'static str {
        match self {
            Conformance::VeryStrong => "There is a very strong Benford relationship.",
            Conformance::Strong => "There is a strong Benford relationship.",
            Conformance::Moderate => "There is a moderate Benford relationship.",
            Conformance::Weak => "There is a weak Benford relationship.",
            Conformance::NoRelationship => "There is not a Benford relationship.",
        }
    }
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Conformance::VeryStrong => "very strong",
            Conformance::Strong => "strong",
            Conformance::Moderate => "moderate",
            Conformance::Weak => "weak",
            Conformance::NoRelationship => "none",
        };
        f.write_str(label)
    }
}

/// Deviation of the observed digit distribution from the expected one
///
/// `variance = (1/9) * sum((actual / expected - 1)^2)`, `deviation = sqrt(variance)`.
///
/// # Example
///
/// ```
/// use nbstats::frequency::{expected_percentages, BenfordResult, Conformance, FrequencyTable};
///
/// // Observed frequencies exactly matching the law
/// let mut table = FrequencyTable::from_counts([0; 9], 1);
/// table.actual = expected_percentages();
///
/// let result = BenfordResult::from_table(&table);
/// assert!(result.deviation < 1e-12);
/// assert_eq!(result.conformance, Conformance::VeryStrong);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenfordResult {
    pub variance: f64,
    pub deviation: f64,
    pub conformance: Conformance,
}

impl BenfordResult {
    /// Score the actual frequencies of `table` against its expected ones
    pub fn from_table(table: &FrequencyTable) -> Self {
        let variance = table
            .actual
            .iter()
            .zip(&table.expected)
            .map(|(&actual, &expected)| {
                let ratio = actual / expected - 1.0;
                ratio * ratio
            })
            .sum::<f64>()
            / DIGITS as f64;
        let deviation = variance.sqrt();

        tracing::debug!(variance, deviation, "benford deviation computed");

        Self {
            variance,
            deviation,
            conformance: Conformance::from_deviation(deviation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Conformance::from_deviation(0.0), Conformance::VeryStrong);
        assert_eq!(Conformance::from_deviation(0.099), Conformance::VeryStrong);
        assert_eq!(Conformance::from_deviation(0.1), Conformance::Strong);
        assert_eq!(Conformance::from_deviation(0.2), Conformance::Moderate);
        assert_eq!(Conformance::from_deviation(0.349), Conformance::Moderate);
        assert_eq!(Conformance::from_deviation(0.35), Conformance::Weak);
        assert_eq!(Conformance::from_deviation(0.5), Conformance::NoRelationship);
        assert_eq!(Conformance::from_deviation(12.0), Conformance::NoRelationship);
    }

    #[test]
    fn test_ordering_follows_strength() {
        assert!(Conformance::VeryStrong < Conformance::Strong);
        assert!(Conformance::Weak < Conformance::NoRelationship);
    }

    #[test]
    fn test_single_digit_data_is_not_benford() {
        // All mass on digit 1
        let table = FrequencyTable::from_counts([10, 0, 0, 0, 0, 0, 0, 0, 0], 10);
        let result = BenfordResult::from_table(&table);

        // Digit 1: (100 / 30.103 - 1)^2, every other digit contributes 1
        let first = (100.0 / table.expected[0] - 1.0).powi(2);
        let expected_variance = (first + 8.0) / 9.0;

        assert!((result.variance - expected_variance).abs() < 1e-9);
        assert!((result.deviation - expected_variance.sqrt()).abs() < 1e-9);
        assert_eq!(result.conformance, Conformance::NoRelationship);
    }

    #[test]
    fn test_sentences() {
        assert_eq!(
            Conformance::Weak.sentence(),
            "There is a weak Benford relationship."
        );
        assert_eq!(Conformance::VeryStrong.to_string(), "very strong");
    }
}
