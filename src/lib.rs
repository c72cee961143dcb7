//! Detection of active multipath TCP (MPTCP) connections.
//!
//! On Linux the kernel lists every MPTCP connection in
//! `/proc/net/mptcp`. A remote endpoint is using MPTCP when its encoded
//! address appears in the remote address column of that table.
//!
//! ```no_run
//! if mptcpcheck::is_enabled()? {
//!     let mptcp = mptcpcheck::check_hostport("203.0.113.7:51000")?;
//!     println!("MPTCP: {}", mptcp);
//! }
//! # Ok::<(), mptcpcheck::MptcpError>(())
//! ```

pub mod detector;
pub mod encode;
pub mod error;
pub mod hostport;
pub mod probe;
pub mod report;
pub mod server;
pub mod source;
pub mod sys;
pub mod table;

// CLI modules
pub mod cli {
    pub mod args;
}

pub mod formats;

pub use detector::Detector;
pub use encode::{encode_host, encode_key, encode_port};
pub use error::{MptcpError, Result};
pub use hostport::HostPortError;
pub use report::{CheckReport, Verdict};
pub use source::{ProcTable, StaticTable, TableSource};
pub use table::TableEntry;

/// Whether the current host supports multipath TCP.
///
/// Returns `Ok(false)` both when the kernel has no MPTCP support and on
/// platforms without a detection backend.
pub fn is_enabled() -> Result<bool> {
    sys::is_enabled()
}

/// Whether there is an active MPTCP connection to this host from
/// `host:port`.
///
/// Fails with [`MptcpError::NotImplemented`] on platforms without a
/// detection backend and with [`MptcpError::Ipv6Unsupported`] for IPv6
/// peers.
pub fn check(host: &str, port: u16) -> Result<bool> {
    sys::check(host, port)
}

/// Like [`check`], taking a combined `host:port` string such as the peer
/// address of an accepted connection.
///
/// Errors from splitting the string or parsing the port are returned as
/// [`MptcpError::HostPort`].
pub fn check_hostport(hostport: &str) -> Result<bool> {
    let (host, port) = hostport::parse_host_port(hostport)?;
    check(host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hostport_split_errors() {
        assert!(matches!(
            check_hostport("foobar"),
            Err(MptcpError::HostPort(HostPortError::MissingPort))
        ));
        assert!(matches!(
            check_hostport(":1000000000"),
            Err(MptcpError::HostPort(HostPortError::InvalidPort(_)))
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_check_hostport_invalid_host() {
        assert!(matches!(
            check_hostport(":8080"),
            Err(MptcpError::InvalidAddress)
        ));
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn test_check_hostport_not_implemented() {
        assert!(matches!(
            check_hostport("localhost:8080"),
            Err(MptcpError::NotImplemented)
        ));
    }
}
