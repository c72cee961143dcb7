//! MPTCP capability probe
use std::io::ErrorKind;

use log::debug;

use crate::error::Result;
use crate::source::TableSource;

/// Report whether the table behind `source` exists.
///
/// A missing table means the kernel has no MPTCP support, which is a
/// normal answer rather than an error. Any other failure to stat the
/// table is returned.
pub fn is_supported<S: TableSource>(source: &S) -> Result<bool> {
    match source.stat() {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist, MPTCP unsupported", source.describe());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
