use std::{
    fmt,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    str::FromStr,
};

use crate::error::RconError;

/// A server address in the strict `A.B.C.D:PORT` form. Host names are not
/// resolved; only IPv4 literals are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint {
    host: Ipv4Addr,
    port: u16,
}

impl Endpoint {
    pub fn new(host: Ipv4Addr, port: u16) -> Self {
        Endpoint { host, port }
    }

    /// Parse `text` as `A.B.C.D:PORT`. Octets must be 0-255 written without
    /// leading zeros, the port must be all digits and fit in 16 bits.
    pub fn parse(text: &str) -> Result<Self, RconError> {
        let invalid = || RconError::InvalidAddress(text.to_string());

        let (host, port) = text.split_once(':').ok_or_else(invalid)?;

        let mut octets = [0u8; 4];
        let mut parts = host.split('.');
        for octet in octets.iter_mut() {
            *octet = parts.next().and_then(parse_octet).ok_or_else(invalid)?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let port = port.parse::<u16>().map_err(|_| invalid())?;

        Ok(Endpoint::new(Ipv4Addr::from(octets), port))
    }

    pub fn host(&self) -> Ipv4Addr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.host, self.port))
    }
}

fn parse_octet(text: &str) -> Option<u8> {
    let well_formed = match text.len() {
        1 => true,
        2 | 3 => !text.starts_with('0'),
        _ => false,
    };
    if !well_formed || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for Endpoint {
    type Err = RconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid(text: &str) -> bool {
        matches!(Endpoint::parse(text), Err(RconError::InvalidAddress(t)) if t == text)
    }

    #[test]
    fn parses_ip_and_port() {
        let endpoint = Endpoint::parse("127.0.0.1:27960").unwrap();
        assert_eq!(endpoint.host(), Ipv4Addr::new(127, 0, 0, 1));
        assert_eq!(endpoint.port(), 27960);
        assert_eq!(endpoint.to_string(), "127.0.0.1:27960");
    }

    #[test]
    fn accepts_range_edges() {
        let endpoint: Endpoint = "0.0.0.0:0".parse().unwrap();
        assert_eq!(endpoint.port(), 0);
        let endpoint: Endpoint = "255.255.255.255:65535".parse().unwrap();
        assert_eq!(endpoint.host(), Ipv4Addr::BROADCAST);
        assert_eq!(endpoint.port(), 65535);
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(is_invalid("999.0.0.1:1"));
        assert!(is_invalid("256.0.0.1:1"));
        assert!(is_invalid("1.2.3.4"));
        assert!(is_invalid("host:abc"));
        assert!(is_invalid("1.2.3.4:"));
        assert!(is_invalid("1.2.3:29070"));
        assert!(is_invalid("1.2.3.4.5:29070"));
        assert!(is_invalid("1.2.3.4:+80"));
        assert!(is_invalid("1.2.3.4:65536"));
        assert!(is_invalid("01.2.3.4:29070"));
        assert!(is_invalid(" 1.2.3.4:29070"));
        assert!(is_invalid("1.2.3.4:29070:1"));
        assert!(is_invalid(""));
    }
}
