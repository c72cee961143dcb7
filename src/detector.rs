//! MPTCP connection detection over a table source
use std::net::SocketAddr;

use log::debug;

use crate::encode::encode_key;
use crate::error::Result;
use crate::hostport::parse_host_port;
use crate::probe;
use crate::source::TableSource;
use crate::table::{self, TableEntry};

/// Looks up remote endpoints in the MPTCP table provided by `S`.
#[derive(Debug, Clone, Default)]
pub struct Detector<S> {
    source: S,
}

impl<S: TableSource> Detector<S> {
    pub fn new(source: S) -> Self {
        Detector { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the table exists, i.e. whether the host supports MPTCP.
    pub fn is_enabled(&self) -> Result<bool> {
        probe::is_supported(&self.source)
    }

    /// Whether `host:port` is the remote end of an active MPTCP connection.
    pub fn check(&self, host: &str, port: u16) -> Result<bool> {
        Ok(self.find(host, port)?.is_some())
    }

    /// Like [`Detector::check`], taking a combined `host:port` string such as
    /// a peer address. Split and port errors are returned unchanged.
    pub fn check_hostport(&self, hostport: &str) -> Result<bool> {
        let (host, port) = parse_host_port(hostport)?;
        self.check(host, port)
    }

    pub fn check_addr(&self, addr: SocketAddr) -> Result<bool> {
        self.check(&addr.ip().to_string(), addr.port())
    }

    /// Return the table entry for `host:port`, if there is one.
    pub fn find(&self, host: &str, port: u16) -> Result<Option<TableEntry>> {
        let key = encode_key(host, port)?;
        debug!("Looking up {} in {}", key, self.source.describe());

        let reader = self.source.open()?;
        table::find(reader, &key)
    }

    /// Every entry currently in the table.
    pub fn entries(&self) -> Result<Vec<TableEntry>> {
        table::parse_table(self.source.open()?)
    }
}
