//! CSV output formatter for mptcpcheck
use crate::error::OutputError;
use crate::formats::endpoint_or_dash;
use crate::formats::traits::OutputFormatter;
use crate::report::{CheckReport, Verdict};
use crate::table::TableEntry;
use csv::Writer;

/// CSV formatter that outputs data in comma-separated values format
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format_reports(&self, reports: &[CheckReport]) -> Result<String, OutputError> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record(["target", "key", "mptcp", "error"])?;

        for report in reports {
            let error = match &report.verdict {
                Verdict::Failed(msg) => msg.as_str(),
                _ => "",
            };
            wtr.write_record([
                report.target.as_str(),
                report.key.as_deref().unwrap_or(""),
                report.verdict.label(),
                error,
            ])?;
        }

        wtr.flush()?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }

    fn format_entries(&self, entries: &[TableEntry]) -> Result<String, OutputError> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record([
            "slot",
            "local_token",
            "remote_token",
            "is_ipv6",
            "local_address",
            "remote_address",
            "local_endpoint",
            "remote_endpoint",
        ])?;

        for entry in entries {
            wtr.write_record([
                entry.slot.clone(),
                entry.local_token.clone(),
                entry.remote_token.clone(),
                entry.is_ipv6.to_string(),
                entry.local_address.clone(),
                entry.remote_address.clone(),
                endpoint_or_dash(entry.local_endpoint()),
                endpoint_or_dash(entry.remote_endpoint()),
            ])?;
        }

        wtr.flush()?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }

    fn format_enabled(&self, enabled: bool) -> Result<String, OutputError> {
        let mut wtr = Writer::from_writer(vec![]);
        wtr.write_record(["enabled"])?;
        wtr.write_record([enabled.to_string()])?;

        wtr.flush()?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }
}
