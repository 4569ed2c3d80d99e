//! Seams between the analysis core and its consumers
//!
//! The core never formats anything itself. Each output format implements
//! [`Renderer`] over the finished [`Report`].

use std::io::{self, Write};

use crate::report::Report;

/// Turns a finished [`Report`] into bytes on a writer
///
/// # Example
///
/// ```
/// use std::io::{self, Write};
/// use nbstats::report::Report;
/// use nbstats::traits::Renderer;
///
/// struct CountOnly;
///
/// impl Renderer for CountOnly {
///     fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
///         writeln!(out, "{}", report.count())
///     }
/// }
///
/// let report = nbstats::analyze(&b"1 2 3"[..]).unwrap();
/// assert_eq!(CountOnly.render_to_string(&report).unwrap(), "3\n");
/// ```
pub trait Renderer {
    /// Write `report` to `out`
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()>;

    /// Render into a `String`
    fn render_to_string(&self, report: &Report) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(report, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
