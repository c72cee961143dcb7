//! Main entry point for the mptcpcheck tool
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};

use mptcpcheck::cli::args::{Cli, Command};
use mptcpcheck::formats::{OutputDestination, OutputFormat, OutputWriter};
use mptcpcheck::hostport::parse_host_port;
use mptcpcheck::server::{self, Lookup, SystemLookup};
use mptcpcheck::{CheckReport, Detector, MptcpError, ProcTable, Verdict};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli);

    let output_dest = match &cli.output {
        Some(path) => OutputDestination::File(path.clone()),
        None => OutputDestination::Stdout,
    };
    let output_writer = OutputWriter::new(OutputFormat::from(cli.format), output_dest);

    let lookup: Arc<dyn Lookup> = match &cli.table {
        Some(path) => {
            debug!("Using MPTCP table from {}", path.display());
            Arc::new(Detector::new(ProcTable::new(path)))
        }
        None => Arc::new(SystemLookup),
    };

    match cli.command {
        Command::Enabled => {
            let enabled = lookup
                .is_enabled()
                .context("failed to probe for MPTCP support")?;
            output_writer
                .write_enabled(enabled)
                .context("failed to write MPTCP support answer")?;
            Ok(if enabled { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Command::Check { targets, host, port } => {
            let reports = match (host, port) {
                (Some(host), Some(port)) => {
                    let result = lookup.check(&host, port);
                    vec![CheckReport::for_endpoint(&host, port, &result)]
                }
                _ => targets.iter().map(|t| check_target(lookup.as_ref(), t)).collect(),
            };

            output_writer
                .write_reports(&reports)
                .context("failed to write check results")?;
            Ok(exit_code(&reports))
        }
        Command::List => {
            let entries = Detector::new(list_source(cli.table.as_deref())?)
                .entries()
                .context("failed to read MPTCP connections table")?;
            if entries.is_empty() {
                eprintln!("No MPTCP connections found.");
            }
            output_writer
                .write_entries(&entries)
                .context("failed to write table entries")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { listen } => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime
                .block_on(server::serve(&listen, lookup))
                .with_context(|| format!("HTTP server on {} failed", listen))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Check one `host:port` target. Split errors become a failed report.
fn check_target(lookup: &dyn Lookup, target: &str) -> CheckReport {
    match parse_host_port(target) {
        Ok((host, port)) => CheckReport::for_endpoint(host, port, &lookup.check(host, port)),
        Err(e) => CheckReport::new(target, None, &Err(e.into())),
    }
}

/// 0 when every target uses MPTCP, 1 when some do not, 2 on any error.
fn exit_code(reports: &[CheckReport]) -> ExitCode {
    if reports.iter().any(|r| r.verdict.is_error()) {
        ExitCode::from(2)
    } else if reports.iter().all(|r| r.verdict == Verdict::Mptcp) {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn list_source(table: Option<&Path>) -> Result<ProcTable, MptcpError> {
    match table {
        Some(path) => Ok(ProcTable::new(path)),
        None if cfg!(target_os = "linux") => Ok(ProcTable::default()),
        None => Err(MptcpError::NotImplemented),
    }
}
