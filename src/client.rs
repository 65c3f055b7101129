use crate::{
    address::Endpoint,
    config::Timeouts,
    error::RconError,
    packet::Request,
    registry::ServerEntry,
    response::Response,
    transport::{Connector, Transport, UdpConnector},
};
use log::trace;

/// Simple asynchronous rcon client for servers that take out-of-band rcon
/// commands over UDP. Every command gets its own socket, which is closed
/// again before the call returns.
///
/// ## Example
/// ```no_run
/// use oobrcon::client::Client;
/// use std::error::Error;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn Error>> {
///     let client = Client::new();
///     let response = client
///         .command("127.0.0.1:29070", "<put rcon password here>", "status")
///         .await?;
///
///     println!("{}", response);
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct Client<C = UdpConnector> {
    connector: C,
    timeouts: Timeouts,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Connector> Client<C> {
    pub fn with_connector(connector: C) -> Self {
        Client {
            connector,
            timeouts: Timeouts::default(),
        }
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Parses `address` and runs `command` against it. See [Client::execute].
    pub async fn command(
        &self,
        address: &str,
        secret: &str,
        command: &str,
    ) -> Result<String, RconError> {
        let endpoint = Endpoint::parse(address)?;
        self.execute(&endpoint, secret, command).await
    }

    /// Runs `command` against a registered server.
    pub async fn execute_for(&self, server: &ServerEntry, command: &str) -> Result<String, RconError> {
        self.execute(server.endpoint(), server.secret(), command).await
    }

    /// Run a rcon command. The first reply datagram is required; for commands
    /// that the server answers in several datagrams, up to
    /// `max_secondary_attempts` more are read and glued on, stopping at the
    /// first one that does not arrive in time.
    ///
    /// Dropping the returned future mid-flight drops the socket with it.
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        secret: &str,
        command: &str,
    ) -> Result<String, RconError> {
        let request = Request::new(secret, command);

        let mut transport = self.connector.open(endpoint).await?;
        let result = self.exchange(&mut transport, &request).await;
        transport.close();

        trace!("done with {}", endpoint);
        result.map(Response::finalize)
    }

    async fn exchange(
        &self,
        transport: &mut C::Transport,
        request: &Request<'_>,
    ) -> Result<Response, RconError> {
        trace!("sending command {:?}", request.command());
        transport.send(&request.pack()).await?;

        let mut response = Response::new();

        match transport.recv(self.timeouts.primary).await? {
            Some(fragment) => response.append(&fragment),
            None => return Err(RconError::NoResponse),
        }

        if !request.expects_multiple_packets() {
            return Ok(response);
        }

        // there is no framing or packet count, so once the server goes quiet
        // we assume it has nothing more to say
        for attempt in 1..=self.timeouts.max_secondary_attempts {
            match transport.recv(self.timeouts.secondary).await? {
                Some(fragment) => {
                    trace!("got follow-up packet {}", attempt);
                    response.append(&fragment);
                }
                None => {
                    trace!("no follow-up packet on attempt {}, completing response", attempt);
                    break;
                }
            }
        }

        Ok(response)
    }
}
