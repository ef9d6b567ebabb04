//! # Topicast
//!
//! `topicast` is a minimal UDP message broker. Peers send checksummed
//! envelopes as datagrams; the broker verifies them, registers senders under
//! the topics they ask for and answers each valid request on the same socket.
//!
//! ## Core Modules
//!
//! - `message`: the wire envelope, its checksum and the message type catalog.
//! - `handlers`: maps message types to the logic that answers them.
//! - `client`: registered clients and the topic-keyed client pool.
//! - `broker`: per-datagram validation, dispatch and fault accounting.
//! - `transport`: the UDP server and its receive loop.
//! - `config`: loading server configuration from files and environment.
//! - `utils`: error types and logging.

pub mod broker;
pub mod client;
pub mod config;
pub mod handlers;
pub mod message;
pub mod transport;
pub mod utils;
