//! Linux backend reading `/proc/net/mptcp`
use crate::detector::Detector;
use crate::error::Result;
use crate::source::ProcTable;

pub fn is_enabled() -> Result<bool> {
    Detector::new(ProcTable::default()).is_enabled()
}

pub fn check(host: &str, port: u16) -> Result<bool> {
    Detector::new(ProcTable::default()).check(host, port)
}
