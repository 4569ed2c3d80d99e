//! JSON serialization of the report

use std::io::{self, Write};

use crate::report::Report;
use crate::traits::Renderer;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json_pretty(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Pretty-printed JSON, one document per report
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(input: &str) -> Report {
        crate::analyze(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_data_contract_fields() {
        let json = to_json(&report("-5 5 10 15")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["statistics"]["count"], 3);
        assert_eq!(value["statistics"]["min"], 5.0);
        assert_eq!(value["statistics"]["max"], 15.0);
        assert_eq!(value["statistics"]["median"], 10.0);
        assert_eq!(value["statistics"]["mode"]["has_mode"], false);
        assert_eq!(value["frequencies"]["raw"][0], 2);
        assert_eq!(value["frequencies"]["expected"].as_array().unwrap().len(), 9);
        assert_eq!(value["benford"]["conformance"], "no_relationship");
        assert_eq!(value["rejections"][0]["text"], "-5");
        assert_eq!(value["rejections"][0]["reason"], "negative");
    }

    #[test]
    fn test_renderer_output_parses() {
        let text = JsonRenderer.render_to_string(&report("2 2 3")).unwrap();
        assert!(text.ends_with("}\n"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["statistics"]["mode"]["values"][0], 2.0);
        assert_eq!(value["statistics"]["mode"]["frequency"], 2);
    }

    #[test]
    fn test_pretty_matches_compact() {
        let r = report("1 2 3");
        let compact: serde_json::Value =
            serde_json::from_str(&to_json(&r).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&to_json_pretty(&r).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }
}
