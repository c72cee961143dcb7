//! Search of the MPTCP connections table for a remote address
use std::io::BufRead;

use log::debug;

use crate::error::Result;
use crate::table::{TableEntry, TableReader};

/// Find the first entry whose remote address is exactly `target`.
///
/// Scanning stops at the first match, so lines after it are never read.
/// Any parse error met before a match is returned as is.
pub fn find<R: BufRead>(reader: R, target: &str) -> Result<Option<TableEntry>> {
    let mut scanned = 0usize;

    for entry in TableReader::new(reader)? {
        let entry = entry?;
        scanned += 1;

        if entry.remote_address == target {
            debug!("Found {} in MPTCP table after {} entries", target, scanned);
            return Ok(Some(entry));
        }
    }

    debug!("{} not found in {} MPTCP table entries", target, scanned);
    Ok(None)
}

/// Whether any entry has `target` as its remote address.
pub fn contains<R: BufRead>(reader: R, target: &str) -> Result<bool> {
    Ok(find(reader, target)?.is_some())
}
