//! Error types for MPTCP detection
use crate::hostport::HostPortError;

/// Everything that can go wrong while looking up an MPTCP connection.
#[derive(Debug, thiserror::Error)]
pub enum MptcpError {
    /// The host is not an IP literal.
    #[error("invalid IP address")]
    InvalidAddress,

    /// The host is a valid IPv6 address, which the kernel table lookup
    /// does not handle yet.
    #[error("IPv6 detection not yet implemented")]
    Ipv6Unsupported,

    /// There is no detection backend for the current operating system.
    #[error("not implemented")]
    NotImplemented,

    #[error("unexpected end of MPTCP table stream")]
    UnexpectedEndOfStream,

    #[error("invalid MPTCP connections table format")]
    InvalidTableFormat,

    #[error("invalid MPTCP connections table entry on line {line}")]
    InvalidTableEntry { line: usize },

    /// Raw failure from splitting a `host:port` string.
    #[error(transparent)]
    HostPort(#[from] HostPortError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MptcpError>;

/// Failure while rendering or writing command line output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV into_inner error: {0}")]
    CsvIntoInner(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
    #[error("UTF-8 conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}
