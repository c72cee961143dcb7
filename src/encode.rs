//! Conversion of IP addresses and ports into the hex form used by
//! `/proc/net/mptcp`.
//!
//! The kernel prints an IPv4 address as the raw 32-bit word in host
//! (little-endian) order, so `192.168.1.1` appears as `0101A8C0`. Ports are
//! printed as plain 16-bit hex after conversion to host order, so `8080`
//! appears as `1F90`.
use std::net::IpAddr;

use crate::error::{MptcpError, Result};

/// Convert a host IP literal into its table hex form (lower-case).
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are encoded as IPv4.
/// Any other IPv6 address yields [`MptcpError::Ipv6Unsupported`].
pub fn encode_host(host: &str) -> Result<String> {
    let ip: IpAddr = host.parse().map_err(|_| MptcpError::InvalidAddress)?;

    let v4 = match ip {
        IpAddr::V4(v4) => v4,
        IpAddr::V6(v6) => v6.to_ipv4_mapped().ok_or(MptcpError::Ipv6Unsupported)?,
    };

    let [a, b, c, d] = v4.octets();
    Ok(format!("{:02x}{:02x}{:02x}{:02x}", d, c, b, a))
}

/// Convert a port into its table hex form: always 4 lower-case digits.
pub fn encode_port(port: u16) -> String {
    let [hi, lo] = port.to_be_bytes();
    format!("{:02x}{:02x}", hi, lo)
}

/// Build the upper-case `HOST:PORT` key matched against the table's
/// remote address column.
pub fn encode_key(host: &str, port: u16) -> Result<String> {
    let host_hex = encode_host(host)?;
    Ok(format!("{}:{}", host_hex, encode_port(port)).to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_host_ipv4() {
        let cases = [
            ("8.8.4.4", "04040808"),
            ("8.8.8.8", "08080808"),
            ("10.10.10.10", "0a0a0a0a"),
            ("192.168.1.1", "0101a8c0"),
            ("255.255.255.0", "00ffffff"),
            ("0.0.0.0", "00000000"),
        ];

        for (host, expected) in cases {
            assert_eq!(encode_host(host).unwrap(), expected, "host {}", host);
        }
    }

    #[test]
    fn test_encode_host_distinct_addresses_do_not_collide() {
        let a = encode_host("1.2.3.4").unwrap();
        let b = encode_host("4.3.2.1").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, "04030201");
        assert_eq!(b, "01020304");
    }

    #[test]
    fn test_encode_host_invalid() {
        for host in ["localhost", "foobar", "", "256.1.1.1", "1.2.3"] {
            assert!(
                matches!(encode_host(host), Err(MptcpError::InvalidAddress)),
                "host {:?}",
                host
            );
        }
    }

    #[test]
    fn test_encode_host_ipv6_unsupported() {
        for host in [
            "0000:0000:0000::0000",
            "1111:1111:1111::1111",
            "2001:4860:4860::8844",
            "2001:4860:4860::8888",
            "::1",
        ] {
            assert!(
                matches!(encode_host(host), Err(MptcpError::Ipv6Unsupported)),
                "host {:?}",
                host
            );
        }
    }

    #[test]
    fn test_encode_host_ipv4_mapped() {
        assert_eq!(encode_host("::ffff:192.168.1.1").unwrap(), "0101a8c0");
    }

    #[test]
    fn test_encode_port() {
        let cases = [
            (0, "0000"),
            (1, "0001"),
            (100, "0064"),
            (1024, "0400"),
            (2123, "084b"),
            (4873, "1309"),
            (8925, "22dd"),
            (65535, "ffff"),
        ];

        for (port, expected) in cases {
            assert_eq!(encode_port(port), expected, "port {}", port);
        }
    }

    #[test]
    fn test_encode_key_is_upper_case() {
        assert_eq!(encode_key("192.168.1.1", 8080).unwrap(), "0101A8C0:1F90");
        assert_eq!(encode_key("8.8.8.8", 2020).unwrap(), "08080808:07E4");
    }

    #[test]
    fn test_encode_key_propagates_host_errors() {
        assert!(matches!(
            encode_key("foobar", 80),
            Err(MptcpError::InvalidAddress)
        ));
        assert!(matches!(
            encode_key("2001:4860:4860::8888", 80),
            Err(MptcpError::Ipv6Unsupported)
        ));
    }
}
