use std::{
    future::Future,
    io,
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use log::trace;
use tokio::{net::UdpSocket, time::timeout};

use crate::{address::Endpoint, error::RconError};

/// Largest reply datagram we will read in one go. Anything beyond this in a
/// single datagram is cut off by the OS.
pub const RECV_BUFFER_SIZE: usize = 32768;

/// Opens a [Transport] for talking to one server.
pub trait Connector {
    type Transport: Transport;

    /// Fails with [RconError::BindFailed] if the local side cannot be set up.
    fn open(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<Self::Transport, RconError>> + Send;
}

/// Datagram channel to a single server.
pub trait Transport {
    /// Sends `payload` as one datagram.
    fn send(&mut self, payload: &[u8]) -> impl Future<Output = Result<(), RconError>> + Send;

    /// Waits up to `wait` for one datagram. `Ok(None)` means nothing arrived
    /// in time.
    fn recv(
        &mut self,
        wait: Duration,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, RconError>> + Send;

    /// Releases the underlying socket. Safe to call more than once.
    fn close(&mut self);
}

/// Binds a UDP socket on all interfaces using the same port number as the
/// server.
///
/// Sharing the port number means two invocations against servers on the same
/// port cannot run at once on this machine; the second one gets
/// [RconError::BindFailed].
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpConnector;

impl Connector for UdpConnector {
    type Transport = UdpTransport;

    async fn open(&self, endpoint: &Endpoint) -> Result<UdpTransport, RconError> {
        let local = SocketAddr::from((Ipv4Addr::UNSPECIFIED, endpoint.port()));
        let socket = UdpSocket::bind(local)
            .await
            .map_err(RconError::BindFailed)?;

        trace!("bound udp socket to {}", local);

        Ok(UdpTransport {
            socket: Some(socket),
            target: endpoint.socket_addr(),
        })
    }
}

#[derive(Debug)]
pub struct UdpTransport {
    socket: Option<UdpSocket>,
    target: SocketAddr,
}

impl UdpTransport {
    pub fn is_open(&self) -> bool {
        self.socket.is_some()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }

    fn closed() -> io::Error {
        io::Error::new(io::ErrorKind::NotConnected, "socket already closed")
    }
}

impl Transport for UdpTransport {
    async fn send(&mut self, payload: &[u8]) -> Result<(), RconError> {
        let socket = self
            .socket
            .as_ref()
            .ok_or_else(|| RconError::SendFailed(Self::closed()))?;

        socket
            .send_to(payload, self.target)
            .await
            .map_err(RconError::SendFailed)?;
        Ok(())
    }

    async fn recv(&mut self, wait: Duration) -> Result<Option<Vec<u8>>, RconError> {
        let socket = self
            .socket
            .as_ref()
            .ok_or_else(|| RconError::ReceiveFailed(Self::closed()))?;

        let mut buf = vec![0; RECV_BUFFER_SIZE];
        match timeout(wait, socket.recv_from(&mut buf)).await {
            Ok(Ok((len, from))) => {
                trace!("received {} bytes from {}", len, from);
                buf.truncate(len);
                Ok(Some(buf))
            }
            Ok(Err(e)) => Err(RconError::ReceiveFailed(e)),
            Err(_) => Ok(None),
        }
    }

    fn close(&mut self) {
        if self.socket.take().is_some() {
            trace!("closed udp socket");
        }
    }
}
