//! Ready-made handlers. None of them is bound by default.

use tracing::debug;

use super::registry::HandlerResult;
use crate::message::{Message, MessageType};
use crate::utils::error::HandlerError;

/// Sends the payload back unchanged.
pub fn echo(payload: &str) -> HandlerResult {
    debug!("echo handler received: {}", payload);
    Ok(payload.as_bytes().to_vec())
}

/// Answers a `PING` with an encoded `PONG` envelope carrying the same payload.
pub fn pong(payload: &str) -> HandlerResult {
    Message::new(MessageType::PONG, payload)
        .encode()
        .map_err(|e| HandlerError::new(e.to_string()))
}
