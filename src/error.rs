//! Error types for extraction and analysis
//!
//! Only fatal conditions are errors. Tokens that are rejected but let
//! extraction continue (negative numbers, bare zero, overflow) are recorded as
//! [`RejectionEvent`](crate::tokenizer::RejectionEvent)s instead.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, NbError>;

/// Fatal errors raised while reading or analyzing a stream of numbers
#[derive(Error, Debug)]
pub enum NbError {
    /// The input file could not be opened
    #[error("cannot open <{}>: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the input stream failed
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// A token that cannot be interpreted as a number and cannot be skipped
    #[error("failure reading element {index}: length = {}, value = \"{text}\"", .text.len())]
    MalformedToken { index: usize, text: String },

    /// The stream held no acceptable numbers
    #[error("data set is empty")]
    EmptyInput,

    /// Growing a buffer failed
    #[error("buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl NbError {
    /// Whether the error comes from the input contents rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, NbError::MalformedToken { .. } | NbError::EmptyInput)
    }
}
