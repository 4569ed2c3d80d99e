//! # nbstats
//!
//! Descriptive statistics and Newcomb-Benford leading-digit analysis for
//! streams of white-space separated numbers.
//!
//! nbstats reads numbers from any byte stream, cleans them under a strict set
//! of acceptance rules, then reports the classic summary statistics and how
//! closely the leading digits follow the Newcomb-Benford law.
//!
//! ## Features
//!
//! - **Extraction**: byte-level tokenizer that accepts, rejects or aborts on
//!   each token, with a diagnostic record per rejection
//! - **Statistics**: range, mean, median, population variance, standard
//!   deviation, mode and multi-mode
//! - **Benford analysis**: leading-digit histogram, expected vs. actual
//!   frequencies, deviation score and a qualitative verdict
//! - **Rendering**: plain-text and JSON renderers behind one trait
//!
//! ## Quick Start
//!
//! ```rust
//! use nbstats::prelude::*;
//!
//! let report = nbstats::analyze(&b"5 10 15"[..]).unwrap();
//!
//! assert_eq!(report.count(), 3);
//! assert_eq!(report.frequencies.raw[0], 2);
//! println!("{}", report.benford.conformance.sentence());
//! ```
//!
//! ## Step by Step
//!
//! Every stage takes the immutable dataset (or the previous stage's result)
//! and returns a new value:
//!
//! ```rust
//! use nbstats::prelude::*;
//!
//! let extraction = Tokenizer::new(&b"-5 0 0.00 12 7 7"[..]).extract().unwrap();
//! assert_eq!(extraction.rejections().len(), 2);
//!
//! let dataset = Dataset::try_from(extraction).unwrap();
//! let stats = StatisticsSummary::compute(&dataset);
//! let table = FrequencyTable::from_dataset(&dataset);
//! let benford = BenfordResult::from_table(&table);
//!
//! assert_eq!(stats.mode.modes(), Some(&[7.0][..]));
//! assert_eq!(table.raw[6], 2);
//! println!("NB deviation = {:.5}", benford.deviation);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for the report types and the JSON renderer
//! - `cli` (default): the `nbstats` binary; implies `serde`

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dataset;
pub mod error;
pub mod frequency;
mod math;
pub mod output;
pub mod report;
pub mod statistics;
pub mod tokenizer;
pub mod traits;

use std::io::BufRead;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::dataset::Dataset;
    pub use crate::error::NbError;
    pub use crate::frequency::{BenfordResult, Conformance, FrequencyTable};
    pub use crate::output::TextRenderer;
    pub use crate::report::Report;
    pub use crate::statistics::{ModeSet, StatisticsSummary};
    pub use crate::tokenizer::{Extraction, RejectReason, RejectionEvent, Tokenizer};

    #[cfg(feature = "serde")]
    pub use crate::output::JsonRenderer;
}

pub use dataset::Dataset;
pub use error::{NbError, Result};
pub use report::Report;

/// Extract every number from `reader` and analyze it
///
/// # Errors
///
/// Any fatal extraction error: malformed token, empty input, I/O or
/// allocation failure.
pub fn analyze<R: BufRead>(reader: R) -> Result<Report> {
    Report::build(tokenizer::extract(reader)?)
}
