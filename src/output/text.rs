//! Plain-text report with a horizontal bar chart

use std::io::{self, Write};

use crate::frequency::FrequencyTable;
use crate::math::format_general;
use crate::report::Report;
use crate::statistics::ModeSet;
use crate::traits::Renderer;

/// Significant digits used for the descriptive statistics
const SIGNIFICANT_DIGITS: usize = 6;

const DOUBLE_RULE: &str = "\u{2550}";
const RULE: &str = "\u{2500}";
const BAR: &str = "\u{25A0}";
const AXIS_SEGMENT: &str = "\u{2500}\u{2500}\u{2500}";

/// Human-readable report, laid out as two sections
///
/// "Standard Analysis" lists the descriptive statistics and raw digit counts.
/// "Newcomb-Benford's Law Analysis" charts actual against expected
/// frequencies on a 0-50 scale, or 0-100 once a digit reaches 50%.
///
/// # Example
///
/// ```
/// use nbstats::output::TextRenderer;
/// use nbstats::traits::Renderer;
///
/// let report = nbstats::analyze(&b"5 10 15"[..]).unwrap();
/// let text = TextRenderer.render_to_string(&report).unwrap();
///
/// assert!(text.contains("# elements = 3"));
/// assert!(text.contains("There is not a Benford relationship."));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let table = &report.frequencies;
        let width = if table.saturated { 63 } else { 62 };
        let double_rule = DOUBLE_RULE.repeat(width);

        self.standard_section(report, &double_rule, out)?;
        self.benford_section(report, &double_rule, out)?;
        writeln!(out, "{}", double_rule)
    }
}

impl TextRenderer {
    fn standard_section(
        &self,
        report: &Report,
        double_rule: &str,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let stats = &report.statistics;
        let g = |v: f64| format_general(v, SIGNIFICANT_DIGITS);

        writeln!(out, "\nStandard Analysis")?;
        writeln!(out, "{}", double_rule)?;
        writeln!(out, "# elements = {}", stats.count)?;
        if !report.rejections.is_empty() {
            writeln!(out, "# rejected = {}", report.rejections.len())?;
            for event in &report.rejections {
                writeln!(out, "   {}", event)?;
            }
        }
        writeln!(out, "Range = [{} .. {}]", g(stats.min), g(stats.max))?;
        writeln!(out, "Arithmetic mean = {}", g(stats.mean))?;
        writeln!(out, "Arithmetic median = {}", g(stats.median))?;
        writeln!(out, "Variance = {}", g(stats.variance))?;
        writeln!(out, "Standard Deviation = {}", g(stats.std_dev))?;
        writeln!(out, "Mode = {}\n", mode_text(&stats.mode))?;

        for (digit, raw, _, _) in report.frequencies.rows() {
            writeln!(out, " [{}] = {}", digit, raw)?;
        }
        writeln!(out, "\n")
    }

    fn benford_section(
        &self,
        report: &Report,
        double_rule: &str,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let table = &report.frequencies;
        let (header, label_width) = scale_header(table);
        let label_rule = RULE.repeat(label_width);

        writeln!(out, "Newcomb-Benford's Law Analysis")?;
        writeln!(out, "{}", double_rule)?;
        writeln!(out, "{}", header)?;
        writeln!(out, "{} \u{250C}{}", label_rule, axis('\u{252C}'))?;

        let actual_width = if table.saturated { 7 } else { 6 };
        let step = if table.exceeds_half { 2.5 } else { 1.25 };

        for (digit, _, expected, actual) in table.rows() {
            let bar = BAR.repeat((actual / step) as usize);
            writeln!(
                out,
                "{:>6.2}% [{}] ={:>w$.2}% \u{2502}{}",
                expected,
                digit,
                actual,
                bar,
                w = actual_width
            )?;
        }

        writeln!(out, "{} \u{2514}{}", label_rule, axis('\u{2534}'))?;
        writeln!(out, "Variance = {:.5}%", report.benford.variance * 100.0)?;
        writeln!(out, "Std. Dev. = {:.5}%", report.benford.deviation * 100.0)?;
        writeln!(out, "{}", report.benford.conformance.sentence())
    }
}

fn mode_text(mode: &ModeSet) -> String {
    match mode.modes() {
        Some(values) => {
            let list: Vec<String> = values
                .iter()
                .map(|&v| format_general(v, SIGNIFICANT_DIGITS))
                .collect();
            format!("{{ {} }}\u{00D7}{}", list.join(", "), mode.frequency())
        }
        None => "no mode".to_string(),
    }
}

/// Chart header and the width of the label column under it
fn scale_header(table: &FrequencyTable) -> (&'static str, usize) {
    if !table.exceeds_half {
        ("    exp dig    freq  0      10      20      30      40      50", 20)
    } else if !table.saturated {
        ("    exp dig    freq  0  10  20  30  40  50  60  70  80  90 100", 20)
    } else {
        ("    exp dig    freq   0  10  20  30  40  50  60  70  80  90 100", 21)
    }
}

fn axis(joint: char) -> String {
    (0..10).map(|_| format!("{}{}", AXIS_SEGMENT, joint)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        let report = crate::analyze(input.as_bytes()).unwrap();
        TextRenderer.render_to_string(&report).unwrap()
    }

    #[test]
    fn test_standard_section() {
        let text = render("5 10 15");

        assert!(text.contains("# elements = 3\n"));
        assert!(text.contains("Range = [5 .. 15]\n"));
        assert!(text.contains("Arithmetic mean = 10\n"));
        assert!(text.contains("Arithmetic median = 10\n"));
        assert!(text.contains("Variance = 16.6667\n"));
        assert!(text.contains("Standard Deviation = 4.08248\n"));
        assert!(text.contains("Mode = no mode\n"));
        assert!(text.contains(" [1] = 2\n"));
        assert!(text.contains(" [5] = 1\n"));
    }

    #[test]
    fn test_mode_line() {
        let text = render("2 2 3");
        assert!(text.contains("Mode = { 2 }\u{00D7}2\n"));

        let text = render("1 2 2 7 7 9");
        assert!(text.contains("Mode = { 2, 7 }\u{00D7}2\n"));
    }

    #[test]
    fn test_rejected_count_only_when_present() {
        assert!(!render("1 2").contains("# rejected"));
        let text = render("-1 1 2");
        assert!(text.contains("# rejected = 1\n"));
        assert!(text.contains("   rejected #0 <-1>\n"));
    }

    #[test]
    fn test_scale_switches_at_half() {
        let wide = render("5 10 15");
        assert!(wide.contains(" 90 100"));

        let narrow = render("1 2 3 4 5 6 7 8 9");
        assert!(narrow.contains("40      50"));
        assert!(!narrow.contains(" 100"));
    }

    #[test]
    fn test_bar_lengths() {
        // 66.67% on the 0-100 scale is 26 blocks
        let text = render("5 10 15");
        let row = text
            .lines()
            .find(|l| l.contains("% [1] ="))
            .unwrap();
        assert_eq!(row.matches(BAR).count(), 26);
        assert!(row.starts_with(" 30.10% [1] ="));
    }

    #[test]
    fn test_benford_footer() {
        let text = render("5 10 15");
        assert!(text.contains("Std. Dev. = "));
        assert!(text.ends_with(&format!(
            "There is not a Benford relationship.\n{}\n",
            DOUBLE_RULE.repeat(62)
        )));
    }

    #[test]
    fn test_saturated_rule_width() {
        let text = render("1 10 100");
        let rule = DOUBLE_RULE.repeat(63);
        assert!(text.contains(&format!("{}\n", rule)));
        assert!(text.contains("100.00% \u{2502}"));
    }
}
