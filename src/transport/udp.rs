//! UDP transport
//!
//! The server owns one UDP socket. A single loop reads datagrams one at a
//! time and hands each to its own tokio task, so slow processing never stalls
//! the receive loop:
//! - the task runs the datagram through the [`Broker`]
//! - if the broker produced a reply, the task sends it to the datagram's
//!   source address over the same socket
//!
//! Receiving is confined to the loop and each task performs at most one send,
//! so the socket is shared as `Arc<UdpSocket>` without further locking.
//! A failed receive is terminal, except for a connection reset caused by an
//! unreachable peer: the loop stops and the server moves to
//! [`ServerState::Stopped`].

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

use crate::broker::Broker;
use crate::config::Settings;
use crate::utils::error::ServerError;

/// Largest datagram read in one go. Longer datagrams are truncated.
pub const BUFFER_SIZE: usize = 32 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Address resolved, socket not bound yet.
    Created,
    Listening,
    Stopped,
}

pub struct Server {
    addr: SocketAddr,
    socket: Option<Arc<UdpSocket>>,
    state: ServerState,
    broker: Arc<Broker>,
    buffer_size: usize,
}

impl Server {
    /// Resolves `host:port`. The socket is bound later by [`Server::bind`] or
    /// [`Server::listen`].
    pub fn new(host: &str, port: u16, broker: Broker) -> Result<Self, ServerError> {
        let uri = format!("{host}:{port}");
        let addr = uri
            .to_socket_addrs()
            .map_err(|e| ServerError::AddressResolution {
                addr: uri.clone(),
                reason: e.to_string(),
            })?
            .next()
            .ok_or_else(|| ServerError::AddressResolution {
                addr: uri.clone(),
                reason: "no address found".to_string(),
            })?;

        Ok(Self {
            addr,
            socket: None,
            state: ServerState::Created,
            broker: Arc::new(broker),
            buffer_size: BUFFER_SIZE,
        })
    }

    pub fn from_settings(settings: &Settings, broker: Broker) -> Result<Self, ServerError> {
        Ok(Self::new(&settings.server.host, settings.server.port, broker)?
            .with_buffer_size(settings.broker.buffer_size))
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn broker(&self) -> Arc<Broker> {
        self.broker.clone()
    }

    /// Address the socket is bound to, once listening.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket
            .as_ref()
            .and_then(|socket| socket.local_addr().ok())
    }

    /// Binds the socket and returns the bound address. A no-op when already
    /// bound.
    pub async fn bind(&mut self) -> Result<SocketAddr, ServerError> {
        if let Some(socket) = &self.socket {
            return socket.local_addr().map_err(|source| ServerError::Bind {
                addr: self.addr,
                source,
            });
        }

        let socket = UdpSocket::bind(self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr,
                source,
            })?;
        let local = socket.local_addr().map_err(|source| ServerError::Bind {
            addr: self.addr,
            source,
        })?;

        self.socket = Some(Arc::new(socket));
        self.state = ServerState::Listening;
        Ok(local)
    }

    /// Runs the receive loop until the socket fails.
    pub async fn listen(&mut self) -> Result<(), ServerError> {
        if self.state == ServerState::Stopped {
            return Err(ServerError::NotBound);
        }
        let local = self.bind().await?;
        let socket = self.socket.clone().ok_or(ServerError::NotBound)?;

        info!("Broker listening on udp://{}", local);

        let mut buf = vec![0u8; self.buffer_size];
        loop {
            let (len, peer) = match socket.recv_from(&mut buf).await {
                Ok(read) => read,
                Err(e) => match self.receive_failed(e) {
                    Some(err) => return Err(err),
                    None => continue,
                },
            };
            debug!("Read {} bytes from {}", len, peer);

            let datagram = buf[..len].to_vec();
            let broker = self.broker.clone();
            let socket = socket.clone();
            tokio::spawn(respond(broker, socket, datagram, peer));
        }
    }

    /// Decides whether a failed receive ends the loop.
    ///
    /// `ConnectionReset` reports an ICMP port-unreachable for an earlier reply
    /// (Windows surfaces it on the next receive); it concerns one peer, so the
    /// loop keeps reading. Anything else stops the server.
    pub(crate) fn receive_failed(&mut self, e: io::Error) -> Option<ServerError> {
        if e.kind() == io::ErrorKind::ConnectionReset {
            warn!("Peer unreachable, continuing: {}", e);
            return None;
        }

        error!("Error occurred while reading from socket: {}", e);
        self.state = ServerState::Stopped;
        self.socket = None;
        Some(ServerError::Receive(e))
    }
}

async fn respond(broker: Arc<Broker>, socket: Arc<UdpSocket>, datagram: Vec<u8>, peer: SocketAddr) {
    let Some(reply) = broker.handle_datagram(&datagram, peer) else {
        return;
    };
    if let Err(e) = socket.send_to(&reply, peer).await {
        warn!("Failed to send reply to {}: {}", peer, e);
    }
}
