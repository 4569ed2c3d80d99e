//! The analysis pipeline and its result

use crate::dataset::Dataset;
use crate::error::Result;
use crate::frequency::{BenfordResult, FrequencyTable};
use crate::statistics::StatisticsSummary;
use crate::tokenizer::{Extraction, RejectionEvent};

/// Everything computed for one input stream
///
/// This is what renderers consume: descriptive statistics, the leading-digit
/// table, the Newcomb-Benford score and the tokens rejected during extraction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub statistics: StatisticsSummary,
    pub frequencies: FrequencyTable,
    pub benford: BenfordResult,
    pub rejections: Vec<RejectionEvent>,
}

impl Report {
    /// Run every stage over the result of an extraction
    pub fn build(extraction: Extraction) -> Result<Self> {
        let (values, rejections) = extraction.into_parts();
        let dataset = Dataset::new(values)?;
        Ok(Self::from_dataset(&dataset, rejections))
    }

    /// Run every stage over an existing dataset
    pub fn from_dataset(dataset: &Dataset, rejections: Vec<RejectionEvent>) -> Self {
        let statistics = StatisticsSummary::compute(dataset);
        let frequencies = FrequencyTable::from_dataset(dataset);
        let benford = BenfordResult::from_table(&frequencies);

        tracing::info!(
            elements = statistics.count,
            rejected = rejections.len(),
            conformance = %benford.conformance,
            "analysis complete"
        );

        Self {
            statistics,
            frequencies,
            benford,
            rejections,
        }
    }

    /// Number of values analyzed
    pub fn count(&self) -> usize {
        self.statistics.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Conformance;
    use crate::tokenizer::extract;

    #[test]
    fn test_build_from_extraction() {
        let extraction = extract(&b"-5 5 10 15"[..]).unwrap();
        let report = Report::build(extraction).unwrap();

        assert_eq!(report.count(), 3);
        assert_eq!(report.statistics.min, 5.0);
        assert_eq!(report.statistics.max, 15.0);
        assert_eq!(report.frequencies.raw[0], 2);
        assert_eq!(report.rejections.len(), 1);
        assert_eq!(report.benford.conformance, Conformance::NoRelationship);
    }

    #[test]
    fn test_from_dataset() {
        let dataset = Dataset::new(vec![2.0, 2.0, 3.0]).unwrap();
        let report = Report::from_dataset(&dataset, Vec::new());

        assert_eq!(report.statistics.mode.modes(), Some(&[2.0][..]));
        assert!(report.rejections.is_empty());
    }
}
