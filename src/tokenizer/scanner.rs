//! Byte-level input cursor with one byte of lookahead

use std::io::{self, BufRead};

/// Ctrl-Z, the interactive end-of-input marker on Windows consoles
pub const CTRL_Z: u8 = 0x1A;

/// `isspace` in the C locale
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Reads a [`BufRead`] one byte at a time
///
/// An optional end marker byte terminates the stream exactly like EOF; once
/// seen, every later read returns `None`.
#[derive(Debug)]
pub(crate) struct Scanner<R> {
    reader: R,
    end_marker: Option<u8>,
    finished: bool,
    consumed: u64,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            end_marker: None,
            finished: false,
            consumed: 0,
        }
    }

    pub fn set_end_marker(&mut self, marker: Option<u8>) {
        self.end_marker = marker;
    }

    /// Look at the next byte without consuming it
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.finished {
            return Ok(None);
        }

        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        match byte {
            Some(b) if Some(b) == self.end_marker => {
                self.finished = true;
                Ok(None)
            }
            None => {
                self.finished = true;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Consume and return the next byte
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.reader.consume(1);
            self.consumed += 1;
        }
        Ok(byte)
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.consumed
    }
}
