//! Leading-digit frequencies and Newcomb-Benford analysis
//!
//! # Types
//!
//! - [`FrequencyTable`]: raw counts, expected and actual percentages per digit
//! - [`BenfordResult`]: deviation of the actual distribution from the law
//! - [`Conformance`]: qualitative strength of the relationship
//!
//! # Example
//!
//! ```
//! use nbstats::Dataset;
//! use nbstats::frequency::{BenfordResult, FrequencyTable};
//!
//! let dataset = Dataset::new(vec![1.0, 1.5, 2.0, 3.0, 12.0, 140.0]).unwrap();
//!
//! let table = FrequencyTable::from_dataset(&dataset);
//! let benford = BenfordResult::from_table(&table);
//!
//! println!("NB deviation: {:.5}", benford.deviation);
//! println!("{}", benford.conformance.sentence());
//! ```

mod benford;
mod leading_digit;
mod table;

pub use benford::{BenfordResult, Conformance};
pub use leading_digit::leading_digit;
pub use table::{expected_percentages, FrequencyTable, DIGITS, HALF_SCALE_LIMIT, SATURATION_LIMIT};
