//! JSONL (JSON Lines) output formatter for mptcpcheck
use crate::error::OutputError;
use crate::formats::traits::OutputFormatter;
use crate::report::CheckReport;
use crate::table::TableEntry;
use serde::Serialize;

/// JSONL formatter that outputs data as JSON objects, one per line
pub struct JsonlFormatter;

fn to_lines<T: Serialize>(items: &[T]) -> Result<String, OutputError> {
    let mut output = String::new();

    for item in items {
        output.push_str(&serde_json::to_string(item)?);
        output.push('\n');
    }

    Ok(output)
}

impl OutputFormatter for JsonlFormatter {
    fn format_reports(&self, reports: &[CheckReport]) -> Result<String, OutputError> {
        to_lines(reports)
    }

    fn format_entries(&self, entries: &[TableEntry]) -> Result<String, OutputError> {
        to_lines(entries)
    }

    fn format_enabled(&self, enabled: bool) -> Result<String, OutputError> {
        let mut line = serde_json::json!({ "enabled": enabled }).to_string();
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::fixtures;

    #[test]
    fn test_enabled_line() {
        assert_eq!(JsonlFormatter.format_enabled(false).unwrap(), "{\"enabled\":false}\n");
    }

    #[test]
    fn test_one_object_per_line() {
        let out = JsonlFormatter.format_entries(&fixtures::entries()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["remote_address"].is_string());
        }
    }
}
