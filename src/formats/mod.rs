//! Output format module for mptcpcheck
pub mod csv;
pub mod json;
pub mod jsonl;
pub mod text;
pub mod traits;

pub use traits::{OutputDestination, OutputFormat, OutputFormatter, OutputWriter};

use std::net::SocketAddrV4;

/// Decoded endpoint for display, `-` when the entry cannot be decoded.
pub(crate) fn endpoint_or_dash(endpoint: Option<SocketAddrV4>) -> String {
    endpoint.map_or_else(|| "-".to_string(), |e| e.to_string())
}
