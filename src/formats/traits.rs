//! Output format traits for mptcpcheck
use crate::error::OutputError;
use crate::report::CheckReport;
use crate::table::TableEntry;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    fn format_reports(&self, reports: &[CheckReport]) -> Result<String, OutputError>;
    fn format_entries(&self, entries: &[TableEntry]) -> Result<String, OutputError>;
    fn format_enabled(&self, enabled: bool) -> Result<String, OutputError>;
}

/// Enum for output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    Jsonl,
}

/// Enum for output destination
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(std::path::PathBuf),
}

/// Output writer that combines format and destination
pub struct OutputWriter {
    formatter: Box<dyn OutputFormatter>,
    destination: OutputDestination,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, destination: OutputDestination) -> Self {
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(crate::formats::text::TextFormatter),
            OutputFormat::Csv => Box::new(crate::formats::csv::CsvFormatter),
            OutputFormat::Json => Box::new(crate::formats::json::JsonFormatter),
            OutputFormat::Jsonl => Box::new(crate::formats::jsonl::JsonlFormatter),
        };

        Self {
            formatter,
            destination,
        }
    }

    /// Write check reports to the configured destination
    pub fn write_reports(&self, reports: &[CheckReport]) -> Result<(), OutputError> {
        let content = self.formatter.format_reports(reports)?;
        self.emit(content)
    }

    /// Write table entries to the configured destination
    pub fn write_entries(&self, entries: &[TableEntry]) -> Result<(), OutputError> {
        let content = self.formatter.format_entries(entries)?;
        self.emit(content)
    }

    /// Write the MPTCP support answer to the configured destination
    pub fn write_enabled(&self, enabled: bool) -> Result<(), OutputError> {
        let content = self.formatter.format_enabled(enabled)?;
        self.emit(content)
    }

    fn emit(&self, content: String) -> Result<(), OutputError> {
        match &self.destination {
            OutputDestination::Stdout => {
                print!("{}", content);
                if !content.ends_with('\n') {
                    println!();
                }
            }
            OutputDestination::File(path) => {
                std::fs::write(path, content)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_reports_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let writer = OutputWriter::new(OutputFormat::Jsonl, OutputDestination::File(path.clone()));

        let reports = [CheckReport::for_endpoint("8.8.8.8", 2020, &Ok(true))];
        writer.write_reports(&reports).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("\"target\":\"8.8.8.8:2020\""));
        assert!(written.contains("\"verdict\":\"mptcp\""));
    }

    #[test]
    fn test_write_enabled_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enabled.txt");
        let writer = OutputWriter::new(OutputFormat::Text, OutputDestination::File(path.clone()));

        writer.write_enabled(false).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "no\n");
    }
}
