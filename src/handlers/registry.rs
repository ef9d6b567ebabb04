use std::collections::HashMap;
use std::sync::Arc;

use crate::message::MessageType;
use crate::utils::error::{HandlerError, HandlerRegistryError};

pub type HandlerResult = Result<Vec<u8>, HandlerError>;

/// Logic bound to one message type.
///
/// A handler receives the payload of a verified message and returns the raw
/// bytes to send back to the sender.
pub trait MessageHandler: Send + Sync + 'static {
    fn handle(&self, payload: &str) -> HandlerResult;
}

impl<F> MessageHandler for F
where
    F: Fn(&str) -> HandlerResult + Send + Sync + 'static,
{
    fn handle(&self, payload: &str) -> HandlerResult {
        self(payload)
    }
}

/// Maps a message type to at most one handler.
///
/// Handlers are expected to be registered before the server starts; the
/// registry is read-only once shared with the receive loop.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<MessageType, Arc<dyn MessageHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Binds `handler` to `msg_type`. An existing binding is never replaced.
    pub fn register<H: MessageHandler>(
        &mut self,
        msg_type: MessageType,
        handler: H,
    ) -> Result<(), HandlerRegistryError> {
        if self.handlers.contains_key(&msg_type) {
            return Err(HandlerRegistryError::DuplicateHandler(msg_type));
        }
        self.handlers.insert(msg_type, Arc::new(handler));
        Ok(())
    }

    pub fn unregister(&mut self, msg_type: MessageType) -> Result<(), HandlerRegistryError> {
        self.handlers
            .remove(&msg_type)
            .map(|_| ())
            .ok_or(HandlerRegistryError::NotFound(msg_type))
    }

    pub fn lookup(
        &self,
        msg_type: MessageType,
    ) -> Result<Arc<dyn MessageHandler>, HandlerRegistryError> {
        self.handlers
            .get(&msg_type)
            .cloned()
            .ok_or(HandlerRegistryError::NotFound(msg_type))
    }

    /// Codes with a bound handler, in ascending order.
    pub fn registered_types(&self) -> Vec<MessageType> {
        let mut types: Vec<_> = self.handlers.keys().copied().collect();
        types.sort();
        types
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("types", &self.registered_types())
            .finish()
    }
}
