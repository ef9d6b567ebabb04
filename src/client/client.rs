use std::net::SocketAddr;

/// Whether a client is still reachable for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientState {
    #[default]
    Active,
    Closed,
}

impl ClientState {
    pub fn is_active(self) -> bool {
        self == ClientState::Active
    }
}

/// A remote endpoint that registered with the broker.
///
/// Equality and hashing cover both the address and the state, so the same
/// address in a different state is a different client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Client {
    addr: SocketAddr,
    state: ClientState,
}

impl Client {
    pub fn new(addr: SocketAddr, state: ClientState) -> Self {
        Self { addr, state }
    }

    /// An active client at `addr`.
    pub fn active(addr: SocketAddr) -> Self {
        Self::new(addr, ClientState::Active)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn set_state(&mut self, state: ClientState) {
        self.state = state;
    }
}
