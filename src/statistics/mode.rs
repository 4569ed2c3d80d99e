//! Mode and multi-mode detection over sorted data

/// The most frequent value(s) of a sorted dataset
///
/// Holds every value whose run of equal neighbours is the longest, and that
/// run length. When all distinct values are equally frequent no value stands
/// out and the set reports "no mode".
///
/// # Example
///
/// ```
/// use nbstats::statistics::ModeSet;
///
/// let modes = ModeSet::from_sorted(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
/// assert_eq!(modes.modes(), Some(&[2.0, 3.0][..]));
/// assert_eq!(modes.frequency(), 2);
///
/// let flat = ModeSet::from_sorted(&[1.0, 2.0, 3.0]);
/// assert!(!flat.has_mode());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModeSet {
    values: Vec<f64>,
    frequency: usize,
    has_mode: bool,
}

impl ModeSet {
    /// Scan `sorted` for its longest runs of equal values
    ///
    /// The slice must be sorted ascending so equal values are adjacent.
    pub fn from_sorted(sorted: &[f64]) -> Self {
        let mut values = Vec::new();
        let mut frequency = 0;

        for run in sorted.chunk_by(|a, b| a == b) {
            match run.len().cmp(&frequency) {
                core::cmp::Ordering::Greater => {
                    values.clear();
                    values.push(run[0]);
                    frequency = run.len();
                }
                core::cmp::Ordering::Equal => values.push(run[0]),
                core::cmp::Ordering::Less => {}
            }
        }

        // No value repeats, or every distinct value repeats equally often
        let has_mode = frequency > 1 && values.len() * frequency != sorted.len();

        Self {
            values,
            frequency,
            has_mode,
        }
    }

    /// Whether some value stands out as more frequent than the rest
    pub fn has_mode(&self) -> bool {
        self.has_mode
    }

    /// The modal values, or `None` when there is no mode
    pub fn modes(&self) -> Option<&[f64]> {
        self.has_mode.then_some(self.values.as_slice())
    }

    /// Values sharing the longest run, regardless of whether they form a mode
    pub fn candidates(&self) -> &[f64] {
        &self.values
    }

    /// Length of the longest run
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// More than one modal value
    pub fn is_multimodal(&self) -> bool {
        self.has_mode && self.values.len() > 1
    }
}
