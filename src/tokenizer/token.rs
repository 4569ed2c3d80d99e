//! Extraction results: accepted values and the rejection log

use core::fmt;

/// Why a token was left out of the dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RejectReason {
    /// The token started with a minus sign
    Negative,
    /// A zero without a fractional part, or a zero-led token that is not a number
    Zero,
    /// The token converted to an infinite value
    NonFinite,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Negative => f.write_str("negative number"),
            RejectReason::Zero => f.write_str("zero"),
            RejectReason::NonFinite => f.write_str("INFINITY"),
        }
    }
}

/// A token that was skipped while extraction carried on
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RejectionEvent {
    /// Element position at which the token was met
    pub index: usize,
    /// The token text as read
    pub text: String,
    /// Rejection cause
    pub reason: RejectReason,
}

impl RejectionEvent {
    pub fn new(index: usize, text: impl Into<String>, reason: RejectReason) -> Self {
        Self {
            index,
            text: text.into(),
            reason,
        }
    }
}

impl fmt::Display for RejectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::NonFinite => {
                write!(f, "rejected #{} <{}> = INFINITY", self.index, self.text)
            }
            _ => write!(f, "rejected #{} <{}>", self.index, self.text),
        }
    }
}

/// Output of a successful extraction pass
///
/// Values are in input order and never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub(crate) values: Vec<f64>,
    pub(crate) rejections: Vec<RejectionEvent>,
}

impl Extraction {
    /// Accepted values in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Tokens rejected along the way
    pub fn rejections(&self) -> &[RejectionEvent] {
        &self.rejections
    }

    /// Number of accepted values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for an extraction produced by the tokenizer
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into the value array and the rejection log
    pub fn into_parts(self) -> (Vec<f64>, Vec<RejectionEvent>) {
        (self.values, self.rejections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let negative = RejectionEvent::new(0, "-5", RejectReason::Negative);
        assert_eq!(negative.to_string(), "rejected #0 <-5>");

        let overflow = RejectionEvent::new(3, "1000", RejectReason::NonFinite);
        assert_eq!(overflow.to_string(), "rejected #3 <1000> = INFINITY");
    }
}
