//! The `transport` module is responsible for the network side of the broker:
//! owning the UDP socket, reading datagrams and sending replies back to
//! their senders.

pub mod udp;

pub use udp::{BUFFER_SIZE, Server, ServerState};
