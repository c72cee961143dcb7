//! JSON output formatter for mptcpcheck
use crate::error::OutputError;
use crate::formats::traits::OutputFormatter;
use crate::report::CheckReport;
use crate::table::TableEntry;

#[derive(serde::Serialize)]
struct OutputWrapper<'a, T> {
    command: &'static str,
    timestamp: String,
    count: usize,
    results: &'a [T],
}

impl<'a, T> OutputWrapper<'a, T> {
    fn new(command: &'static str, results: &'a [T]) -> Self {
        OutputWrapper {
            command,
            timestamp: chrono::Utc::now().to_rfc3339(),
            count: results.len(),
            results,
        }
    }
}

#[derive(serde::Serialize)]
struct EnabledOutput {
    command: &'static str,
    timestamp: String,
    enabled: bool,
}

/// JSON formatter that outputs data in JSON format with metadata
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_reports(&self, reports: &[CheckReport]) -> Result<String, OutputError> {
        let json = serde_json::to_string_pretty(&OutputWrapper::new("check", reports))?;
        Ok(json)
    }

    fn format_entries(&self, entries: &[TableEntry]) -> Result<String, OutputError> {
        let json = serde_json::to_string_pretty(&OutputWrapper::new("list", entries))?;
        Ok(json)
    }

    fn format_enabled(&self, enabled: bool) -> Result<String, OutputError> {
        let output = EnabledOutput {
            command: "enabled",
            timestamp: chrono::Utc::now().to_rfc3339(),
            enabled,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
