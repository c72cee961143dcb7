//! Text (table) output formatter for mptcpcheck
use crate::error::OutputError;
use crate::formats::endpoint_or_dash;
use crate::formats::traits::OutputFormatter;
use crate::report::{CheckReport, Verdict};
use crate::table::TableEntry;
use prettytable::{Cell, Row, Table};

/// Text formatter that outputs data in a human-readable table format
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_reports(&self, reports: &[CheckReport]) -> Result<String, OutputError> {
        let mut table = Table::new();
        table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(Row::new(vec![
            Cell::new("TARGET").style_spec("c"),
            Cell::new("KEY").style_spec("c"),
            Cell::new("MPTCP").style_spec("c"),
            Cell::new("ERROR").style_spec("c"),
        ]));

        for report in reports {
            let error = match &report.verdict {
                Verdict::Failed(msg) => msg.as_str(),
                _ => "",
            };
            table.add_row(Row::new(vec![
                Cell::new(&report.target),
                Cell::new(report.key.as_deref().unwrap_or("-")),
                Cell::new(report.verdict.label()),
                Cell::new(error),
            ]));
        }

        Ok(table.to_string())
    }

    fn format_entries(&self, entries: &[TableEntry]) -> Result<String, OutputError> {
        let mut table = Table::new();
        table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(Row::new(vec![
            Cell::new("SL").style_spec("c"),
            Cell::new("LOC_TOK").style_spec("c"),
            Cell::new("REM_TOK").style_spec("c"),
            Cell::new("V6").style_spec("c"),
            Cell::new("LOCAL_ADDRESS").style_spec("c"),
            Cell::new("REMOTE_ADDRESS").style_spec("c"),
            Cell::new("LOCAL").style_spec("c"),
            Cell::new("REMOTE").style_spec("c"),
        ]));

        for entry in entries {
            table.add_row(Row::new(vec![
                Cell::new(&entry.slot),
                Cell::new(&entry.local_token),
                Cell::new(&entry.remote_token),
                Cell::new(if entry.is_ipv6 { "1" } else { "0" }),
                Cell::new(&entry.local_address),
                Cell::new(&entry.remote_address),
                Cell::new(&endpoint_or_dash(entry.local_endpoint())),
                Cell::new(&endpoint_or_dash(entry.remote_endpoint())),
            ]));
        }

        Ok(table.to_string())
    }

    fn format_enabled(&self, enabled: bool) -> Result<String, OutputError> {
        Ok(if enabled { "yes\n" } else { "no\n" }.to_string())
    }
}
