//! Stub backend for platforms without an MPTCP connections table
use crate::error::{MptcpError, Result};

/// MPTCP support cannot be discovered here, so report it as absent.
pub fn is_enabled() -> Result<bool> {
    Ok(false)
}

pub fn check(_host: &str, _port: u16) -> Result<bool> {
    Err(MptcpError::NotImplemented)
}
