//! Command-line argument parsing for mptcpcheck
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::formats::OutputFormat;

#[derive(Parser)]
#[command(name = "mptcpcheck")]
#[command(about = "Detect multipath TCP connections to this host", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read the MPTCP connections table from FILE instead of the kernel
    #[arg(short, long, value_name = "FILE", env = "MPTCP_TABLE", global = true)]
    pub table: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable verbose output (status messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report whether this host supports MPTCP
    Enabled,

    /// Check whether remote endpoints are connected over MPTCP
    Check {
        /// Remote endpoints, e.g. 203.0.113.7:51000 or [2001:db8::1]:443
        #[arg(value_name = "HOST:PORT", required_unless_present = "host")]
        targets: Vec<String>,

        /// Remote host IP address
        #[arg(long, requires = "port", conflicts_with = "targets")]
        host: Option<String>,

        /// Remote port
        #[arg(long, requires = "host")]
        port: Option<u16>,
    },

    /// List every connection in the MPTCP table
    List,

    /// Serve an HTTP page telling clients whether they use MPTCP
    Serve {
        /// Address to bind, `:PORT` binds all interfaces
        #[arg(short, long, default_value = ":8080", env = "MPTCPCHECK_LISTEN")]
        listen: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Csv,
    Json,
    Jsonl,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_targets() {
        let cli = Cli::try_parse_from(["mptcpcheck", "check", "8.8.8.8:2020", "1.1.1.1:53"]).unwrap();
        match cli.command {
            Command::Check { targets, host, port } => {
                assert_eq!(targets, vec!["8.8.8.8:2020", "1.1.1.1:53"]);
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_check_host_and_port() {
        let cli = Cli::try_parse_from([
            "mptcpcheck", "check", "--host", "8.8.8.8", "--port", "2020", "--format", "json",
        ])
        .unwrap();
        assert!(cli.format == OutputFormatArg::Json);
        assert!(matches!(
            cli.command,
            Command::Check { host: Some(_), port: Some(2020), .. }
        ));
    }

    #[test]
    fn test_check_requires_a_target() {
        assert!(Cli::try_parse_from(["mptcpcheck", "check"]).is_err());
        assert!(Cli::try_parse_from(["mptcpcheck", "check", "--host", "8.8.8.8"]).is_err());
        assert!(Cli::try_parse_from(["mptcpcheck", "check", "--port", "70000", "--host", "a"]).is_err());
    }
}
