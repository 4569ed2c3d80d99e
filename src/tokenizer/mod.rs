//! Number extraction from raw byte streams
//!
//! The tokenizer walks a stream of white-space separated tokens and sorts each
//! run of non-blank bytes into one of three outcomes:
//!
//! - **accepted**: converted to an `f64` and appended to the value array
//! - **rejected**: logged as a [`RejectionEvent`], extraction continues
//! - **malformed**: extraction stops with [`NbError::MalformedToken`]
//!
//! The outcome depends on how the run starts:
//!
//! | Leading byte | Behaviour |
//! |--------------|-----------|
//! | `-` then digit or `.` | rejected as a negative number |
//! | `-` then anything else | malformed |
//! | `0` | accepted if the value is positive or the text is a decimal zero (`0.00`), rejected otherwise |
//! | `1`..`9` | letters truncate the token; overflow is rejected |
//! | any other byte | accepted if the value is positive, malformed otherwise |
//!
//! # Example
//!
//! ```
//! use nbstats::tokenizer::{RejectReason, Tokenizer};
//!
//! let extraction = Tokenizer::new(&b"5 -3 0 0.00 12kg"[..]).extract().unwrap();
//!
//! assert_eq!(extraction.values(), &[5.0, 0.0, 12.0]);
//! assert_eq!(extraction.rejections()[0].reason, RejectReason::Negative);
//! assert_eq!(extraction.rejections()[1].reason, RejectReason::Zero);
//! ```

mod buffer;
mod parse;
mod scanner;
mod token;

pub use parse::{is_decimal_zero, permissive_parse};
pub use scanner::{is_space, CTRL_Z};
pub use token::{Extraction, RejectReason, RejectionEvent};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{NbError, Result};
use buffer::{push_doubling, INITIAL_CAPACITY};
use scanner::Scanner;

/// Streaming number extractor
///
/// Owns the scratch buffer for the token being read and the growing value
/// array. Both are released when the tokenizer is dropped, whichever way
/// [`extract`](Tokenizer::extract) returns.
#[derive(Debug)]
pub struct Tokenizer<R> {
    scanner: Scanner<R>,
    /// Bytes of the current token
    scratch: Vec<u8>,
    values: Vec<f64>,
    rejections: Vec<RejectionEvent>,
    /// Element position used in diagnostics
    index: usize,
}

impl Tokenizer<BufReader<File>> {
    /// Open a file for extraction
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NbError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading numbers from file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Tokenizer<R> {
    /// Create a tokenizer over any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            scratch: Vec::with_capacity(INITIAL_CAPACITY),
            values: Vec::with_capacity(INITIAL_CAPACITY),
            rejections: Vec::new(),
            index: 0,
        }
    }

    /// Treat `marker` as end of input
    ///
    /// Used for interactive input, where [`CTRL_Z`] ends the data.
    pub fn with_end_marker(mut self, marker: u8) -> Self {
        self.scanner.set_end_marker(Some(marker));
        self
    }

    /// Consume the whole stream
    ///
    /// # Errors
    ///
    /// - [`NbError::MalformedToken`] as soon as an unrecoverable token is met
    /// - [`NbError::EmptyInput`] if no value was accepted
    /// - [`NbError::Io`] / [`NbError::Allocation`] on read or growth failure
    pub fn extract(mut self) -> Result<Extraction> {
        while let Some(byte) = self.scanner.next_byte()? {
            match byte {
                b'-' => self.negative_run(byte)?,
                b'0' => self.zero_run(byte)?,
                b'1'..=b'9' => self.digit_run(byte)?,
                b if is_space(b) => {}
                _ => self.symbol_run(byte)?,
            }
        }

        if self.values.is_empty() {
            return Err(NbError::EmptyInput);
        }

        info!(
            accepted = self.values.len(),
            rejected = self.rejections.len(),
            bytes = self.scanner.position(),
            "extraction finished"
        );

        Ok(Extraction {
            values: self.values,
            rejections: self.rejections,
        })
    }

    /// A run after `-`: a negative number to skip, or garbage that ends the run
    fn negative_run(&mut self, sign: u8) -> Result<()> {
        self.begin_token(sign)?;

        match self.scanner.peek()? {
            Some(b) if b.is_ascii_digit() || b == b'.' => {
                // The byte that stops the run is swallowed as a separator
                while let Some(b) = self.scanner.next_byte()? {
                    if !(b.is_ascii_digit() || b == b'.') {
                        break;
                    }
                    push_doubling(&mut self.scratch, b)?;
                }
                self.reject(RejectReason::Negative);
                Ok(())
            }
            _ => {
                self.take_rest_of_run()?;
                Err(self.malformed())
            }
        }
    }

    /// A run starting with `0`
    fn zero_run(&mut self, zero: u8) -> Result<()> {
        self.begin_token(zero)?;
        self.take_rest_of_run()?;

        let value = permissive_parse(&self.scratch);
        if value > 0.0 {
            self.accept_or_overflow(value)
        } else if is_decimal_zero(&self.scratch) {
            self.accept(0.0)
        } else {
            self.reject(RejectReason::Zero);
            Ok(())
        }
    }

    /// A run starting with `1`..`9`
    ///
    /// Letters end the copied text but not the run, so `12kg` reads as `12`.
    fn digit_run(&mut self, first: u8) -> Result<()> {
        self.begin_token(first)?;

        let mut letter_seen = false;
        while let Some(b) = self.scanner.next_byte()? {
            if b.is_ascii_digit() || b == b'.' {
                if !letter_seen {
                    push_doubling(&mut self.scratch, b)?;
                }
            } else if b.is_ascii_alphabetic() {
                letter_seen = true;
            } else {
                break;
            }
        }

        self.accept_or_overflow(permissive_parse(&self.scratch))
    }

    /// A run starting with a letter or symbol; only a positive number survives
    fn symbol_run(&mut self, first: u8) -> Result<()> {
        self.begin_token(first)?;
        self.take_rest_of_run()?;

        let value = permissive_parse(&self.scratch);
        if value > 0.0 {
            self.accept_or_overflow(value)
        } else {
            Err(self.malformed())
        }
    }

    fn begin_token(&mut self, first: u8) -> Result<()> {
        self.scratch.clear();
        push_doubling(&mut self.scratch, first)?;
        Ok(())
    }

    /// Copy bytes up to the next blank or end of input
    fn take_rest_of_run(&mut self) -> Result<()> {
        while let Some(b) = self.scanner.next_byte()? {
            if is_space(b) {
                break;
            }
            push_doubling(&mut self.scratch, b)?;
        }
        Ok(())
    }

    fn accept_or_overflow(&mut self, value: f64) -> Result<()> {
        if value.is_finite() {
            self.accept(value)
        } else {
            self.reject(RejectReason::NonFinite);
            // Overflowed tokens still occupy an element position
            self.index += 1;
            Ok(())
        }
    }

    fn accept(&mut self, value: f64) -> Result<()> {
        push_doubling(&mut self.values, value)?;
        self.index += 1;
        Ok(())
    }

    fn reject(&mut self, reason: RejectReason) {
        let event = RejectionEvent::new(self.index, self.token_text(), reason);
        warn!(index = event.index, token = %event.text, %reason, "rejected token");
        self.rejections.push(event);
    }

    fn malformed(&self) -> NbError {
        NbError::MalformedToken {
            index: self.index,
            text: self.token_text(),
        }
    }

    fn token_text(&self) -> String {
        String::from_utf8_lossy(&self.scratch).into_owned()
    }
}

/// Extract every value from `reader`
///
/// Shorthand for `Tokenizer::new(reader).extract()`.
pub fn extract<R: BufRead>(reader: R) -> Result<Extraction> {
    Tokenizer::new(reader).extract()
}
