use thiserror::Error;

use crate::address::Endpoint;

/// Possible errors for the package.
#[derive(Error, Debug)]
pub enum RconError {
    /// Returned if the address is not of the form `A.B.C.D:PORT`. Raised
    /// before any socket is opened.
    #[error("invalid server address: {0:?}")]
    InvalidAddress(String),
    /// Returned if the local socket cannot be bound, usually because the port
    /// is already in use on this machine.
    #[error("cannot bind local socket")]
    BindFailed(#[source] std::io::Error),
    /// Returned if the request datagram could not be sent.
    #[error("cannot send message to host")]
    SendFailed(#[source] std::io::Error),
    /// Returned if reading from the socket failed for a reason other than a
    /// timeout.
    #[error("cannot receive response from host")]
    ReceiveFailed(#[source] std::io::Error),
    /// Returned if the server did not answer at all before the primary
    /// timeout. Wrong passwords usually still get an answer, so this tends to
    /// mean the host is down or the port is wrong.
    #[error("no response from host")]
    NoResponse,
    /// Returned if a registry entry is missing one of its fields.
    #[error("invalid server details: {0}")]
    InvalidServer(&'static str),
    /// Returned if a server with that address is already registered.
    #[error("a server with address {0} already exists")]
    DuplicateServer(Endpoint),
    /// Returned if no server with that address is registered.
    #[error("no server with address {0}")]
    UnknownServer(Endpoint),
}
