//! The `error` module defines the error types used within `topicast`.
//!
//! Errors are split by where they can surface: envelope encoding, handler
//! registration, per-datagram processing and server startup. Per-datagram
//! errors never leave the task that handles the datagram.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

use crate::message::MessageType;

/// Failures while turning bytes into a [`Message`](crate::message::Message)
/// or back.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("malformed message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unable to serialize message: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerRegistryError {
    #[error("message handler already exists for type {0}")]
    DuplicateHandler(MessageType),

    #[error("no message handler registered for type {0}")]
    NotFound(MessageType),
}

/// Returned by a handler that could not produce a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("handler failed: {0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Every reason a received datagram can be dropped without a reply.
#[derive(Debug, Error)]
pub enum PacketError {
    #[error("undecodable packet: {0}")]
    Decode(#[source] MessageError),

    #[error("corrupted packet: checksum mismatch")]
    Integrity,

    #[error("unsupported message type {0:#04x}")]
    UnsupportedType(u8),

    #[error("registration carries no topics")]
    NoTopics,

    #[error("no handler for message type {0}")]
    HandlerAbsent(MessageType),

    #[error(transparent)]
    Handler(#[from] HandlerError),

    #[error("unable to encode reply: {0}")]
    Encode(#[source] MessageError),
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("unable to resolve UDP address {addr}: {reason}")]
    AddressResolution { addr: String, reason: String },

    #[error("unable to bind to {addr} for listening: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("error while reading from socket: {0}")]
    Receive(#[source] io::Error),

    #[error("server socket is not bound")]
    NotBound,
}
