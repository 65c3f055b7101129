/// Every out-of-band (connectionless) packet starts with four `0xFF` bytes so
/// the server can tell it apart from in-game traffic.
pub const OUT_OF_BAND_MARKER: [u8; 4] = [0xFF; 4];

/// Commands whose output the server splits over several datagrams.
const MULTI_PACKET_COMMANDS: &[&str] = &["status"];

/// A single rcon request. Servers do not echo an id back and replies carry no
/// header, so the request is all there is to the protocol on our side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    secret: &'a str,
    command: &'a str,
}

impl<'a> Request<'a> {
    /// Builds a request. An empty secret is encoded as-is; rejecting it is up
    /// to whoever stores the credentials.
    pub fn new(secret: &'a str, command: &'a str) -> Self {
        Request { secret, command }
    }

    pub fn secret(&self) -> &str {
        self.secret
    }

    pub fn command(&self) -> &str {
        self.command
    }

    /// Whether the server is known to answer this command with more than one
    /// datagram. Matches the command text exactly.
    pub fn expects_multiple_packets(&self) -> bool {
        MULTI_PACKET_COMMANDS.contains(&self.command)
    }

    /// Marker, then `rcon <secret> <command>`. No terminator.
    ///
    /// The text is expected to be ASCII. Anything else is passed through as
    /// its UTF-8 bytes without validation.
    pub fn pack(&self) -> Vec<u8> {
        let mut payload =
            Vec::with_capacity(OUT_OF_BAND_MARKER.len() + 6 + self.secret.len() + self.command.len());
        payload.extend_from_slice(&OUT_OF_BAND_MARKER);
        payload.extend_from_slice(b"rcon ");
        payload.extend_from_slice(self.secret.as_bytes());
        payload.push(b' ');
        payload.extend_from_slice(self.command.as_bytes());
        payload
    }
}
