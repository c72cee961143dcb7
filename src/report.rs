//! Outcome of a detection, as shown to users
use serde::Serialize;

use crate::encode::encode_key;
use crate::error::{MptcpError, Result};

/// What a front end should tell the user about one lookup.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "verdict", content = "error", rename_all = "snake_case")]
pub enum Verdict {
    Mptcp,
    NotMptcp,
    /// Valid IPv6 peer; the lookup does not handle IPv6 yet.
    Ipv6Unsupported,
    /// No detection backend on this platform.
    NotImplemented,
    /// The answer could not be determined.
    Failed(String),
}

impl Verdict {
    pub fn from_result(result: &Result<bool>) -> Self {
        match result {
            Ok(true) => Verdict::Mptcp,
            Ok(false) => Verdict::NotMptcp,
            Err(MptcpError::Ipv6Unsupported) => Verdict::Ipv6Unsupported,
            Err(MptcpError::NotImplemented) => Verdict::NotImplemented,
            Err(e) => Verdict::Failed(e.to_string()),
        }
    }

    /// Short upper-case label used by the text output and HTTP demo.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Mptcp => "YES",
            Verdict::NotMptcp => "NO",
            Verdict::Ipv6Unsupported => "IPv6 UNSUPPORTED",
            Verdict::NotImplemented => "NOT IMPLEMENTED",
            Verdict::Failed(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Verdict::Mptcp | Verdict::NotMptcp)
    }
}

/// Result of checking one target endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct CheckReport {
    pub target: String,
    /// Encoded table key, when the target could be encoded.
    pub key: Option<String>,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl CheckReport {
    pub fn new(target: impl Into<String>, key: Option<String>, result: &Result<bool>) -> Self {
        CheckReport {
            target: target.into(),
            key,
            verdict: Verdict::from_result(result),
        }
    }

    /// Build a report for `host:port`, filling in the key when it encodes.
    pub fn for_endpoint(host: &str, port: u16, result: &Result<bool>) -> Self {
        let target = if host.contains(':') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        };
        CheckReport::new(target, encode_key(host, port).ok(), result)
    }
}
