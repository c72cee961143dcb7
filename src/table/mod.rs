//! The kernel's MPTCP connections table (`/proc/net/mptcp`)
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

use serde::Serialize;

pub mod parser;
pub mod scanner;

pub use parser::{parse_table, TableReader};
pub use scanner::{contains, find};

/// Header line printed by the kernel at the top of the table.
pub const TABLE_HEADER: &str = "  sl  loc_tok  rem_tok  v6 local_address                         remote_address                        st ns tx_queue rx_queue inode";

/// Minimum number of whitespace separated fields in a data row.
pub const MIN_ENTRY_FIELDS: usize = 6;

/// One row of the MPTCP connections table.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub slot: String,
    pub local_token: String,
    pub remote_token: String,
    pub is_ipv6: bool,
    pub local_address: String,  // HEXADDR:HEXPORT
    pub remote_address: String, // HEXADDR:HEXPORT
}

impl TableEntry {
    /// Decode the local address, for IPv4 entries only.
    pub fn local_endpoint(&self) -> Option<SocketAddrV4> {
        if self.is_ipv6 {
            return None;
        }
        decode_ipv4_endpoint(&self.local_address)
    }

    /// Decode the remote address, for IPv4 entries only.
    pub fn remote_endpoint(&self) -> Option<SocketAddrV4> {
        if self.is_ipv6 {
            return None;
        }
        decode_ipv4_endpoint(&self.remote_address)
    }
}

/// Renders the entry as a kernel-style table row.
impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>3}: {} {} {:>2} {} {} 01 01 00000000:00000000 0",
            self.slot,
            self.local_token,
            self.remote_token,
            if self.is_ipv6 { "1" } else { "0" },
            self.local_address,
            self.remote_address,
        )
    }
}

/// Decode an IPv4 `HEXADDR:HEXPORT` pair as printed by the kernel.
pub fn decode_ipv4_endpoint(encoded: &str) -> Option<SocketAddrV4> {
    let (addr, port) = encoded.split_once(':')?;
    if addr.len() != 8 || port.len() != 4 {
        return None;
    }

    let addr = u32::from_str_radix(addr, 16).ok()?;
    let port = u16::from_str_radix(port, 16).ok()?;
    let [d, c, b, a] = addr.to_be_bytes();
    Some(SocketAddrV4::new(Ipv4Addr::new(a, b, c, d), port))
}
