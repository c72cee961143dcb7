//! Splitting of `host:port` strings such as a peer address
use std::num::ParseIntError;

/// Failure to split or parse a `host:port` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostPortError {
    #[error("missing port in address")]
    MissingPort,
    #[error("too many colons in address")]
    TooManyColons,
    #[error("missing ']' in address")]
    MissingBracket,
    #[error("unexpected '[' in address")]
    UnexpectedOpenBracket,
    #[error("unexpected ']' in address")]
    UnexpectedCloseBracket,
    #[error("invalid port syntax: {0:?}")]
    InvalidPortSyntax(String),
    #[error("invalid port: {0}")]
    InvalidPort(#[from] ParseIntError),
}

/// Split `host:port` or `[host]:port` into its host and port parts.
///
/// The host part may be empty (`":8080"`). No validation of either part
/// happens here.
pub fn split_host_port(hostport: &str) -> Result<(&str, &str), HostPortError> {
    let colon = hostport.rfind(':').ok_or(HostPortError::MissingPort)?;

    let (host, host_start, host_end) = if hostport.starts_with('[') {
        let end = hostport.find(']').ok_or(HostPortError::MissingBracket)?;
        if end + 1 == hostport.len() {
            return Err(HostPortError::MissingPort);
        }
        if end + 1 != colon {
            return Err(if hostport.as_bytes()[end + 1] == b':' {
                HostPortError::TooManyColons
            } else {
                HostPortError::MissingPort
            });
        }
        (&hostport[1..end], 1, end + 1)
    } else {
        let host = &hostport[..colon];
        if host.contains(':') {
            return Err(HostPortError::TooManyColons);
        }
        (host, 0, 0)
    };

    if hostport[host_start..].contains('[') {
        return Err(HostPortError::UnexpectedOpenBracket);
    }
    if hostport[host_end..].contains(']') {
        return Err(HostPortError::UnexpectedCloseBracket);
    }

    Ok((host, &hostport[colon + 1..]))
}

/// Split a `host:port` string and parse the port as a decimal `u16`.
///
/// Only ASCII digits are accepted, so signs such as `+80` are rejected.
pub fn parse_host_port(hostport: &str) -> Result<(&str, u16), HostPortError> {
    let (host, port) = split_host_port(hostport)?;
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HostPortError::InvalidPortSyntax(port.to_string()));
    }
    Ok((host, port.parse::<u16>()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::IntErrorKind;

    #[test]
    fn test_split_ipv4() {
        assert_eq!(split_host_port("8.8.8.8:2020").unwrap(), ("8.8.8.8", "2020"));
    }

    #[test]
    fn test_split_bracketed_ipv6() {
        assert_eq!(
            split_host_port("[2001:4860:4860::8888]:443").unwrap(),
            ("2001:4860:4860::8888", "443")
        );
    }

    #[test]
    fn test_split_empty_host() {
        assert_eq!(split_host_port(":8080").unwrap(), ("", "8080"));
    }

    #[test]
    fn test_split_errors() {
        assert_eq!(split_host_port("foobar"), Err(HostPortError::MissingPort));
        assert_eq!(split_host_port("::1:80"), Err(HostPortError::TooManyColons));
        assert_eq!(split_host_port("[::1:80"), Err(HostPortError::MissingBracket));
        assert_eq!(split_host_port("[::1]"), Err(HostPortError::MissingPort));
        assert_eq!(split_host_port("[::1]x:80"), Err(HostPortError::MissingPort));
        assert_eq!(split_host_port("[::1]:80:90"), Err(HostPortError::TooManyColons));
        assert_eq!(split_host_port("a[b:80"), Err(HostPortError::UnexpectedOpenBracket));
        assert_eq!(split_host_port("a]b:80"), Err(HostPortError::UnexpectedCloseBracket));
    }

    #[test]
    fn test_parse_port_errors() {
        let kind = |s: &str| match parse_host_port(s) {
            Err(HostPortError::InvalidPort(e)) => e.kind().clone(),
            other => panic!("unexpected result for {:?}: {:?}", s, other),
        };

        assert_eq!(kind(":1000000000"), IntErrorKind::PosOverflow);
        assert_eq!(kind(":70000"), IntErrorKind::PosOverflow);
        assert_eq!(kind(":"), IntErrorKind::Empty);

        for (hostport, port) in [
            (":foo", "foo"),
            (":-1", "-1"),
            (":+80", "+80"),
            ("8.8.8.8:+2020", "+2020"),
            (":8 0", "8 0"),
        ] {
            assert_eq!(
                parse_host_port(hostport),
                Err(HostPortError::InvalidPortSyntax(port.to_string())),
                "hostport {:?}",
                hostport
            );
        }
    }

    #[test]
    fn test_parse_host_port() {
        assert_eq!(parse_host_port("10.0.0.1:65535").unwrap(), ("10.0.0.1", 65535));
    }
}
