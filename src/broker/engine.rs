//! Broker engine
//!
//! Turns one received datagram into an optional reply:
//! - decode the envelope, then check integrity and type validity
//! - `REGISTER` subscribes the sender to the listed topics and is answered
//!   with a `REGISTERACK`
//! - every other type goes to the handler bound in the [`HandlerRegistry`]
//!
//! Any failure drops the datagram without a reply and is recorded in the
//! broker's [`FaultStats`]. The engine is shared between datagram tasks as
//! `Arc<Broker>`; the client pool is the only state mutated after startup and
//! sits behind its own lock.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use super::faults::{FaultCounts, FaultStats};
use super::register::{format_topics, parse_topics};
use crate::client::{Client, ClientPool};
use crate::handlers::{HandlerRegistry, MessageHandler};
use crate::message::{Message, MessageType};
use crate::utils::error::{HandlerRegistryError, PacketError};

#[derive(Debug, Default)]
pub struct Broker {
    handlers: HandlerRegistry,
    clients: Arc<Mutex<ClientPool>>,
    faults: FaultStats,
}

impl Broker {
    pub fn new() -> Self {
        Self::with_handlers(HandlerRegistry::new())
    }

    pub fn with_handlers(handlers: HandlerRegistry) -> Self {
        Self {
            handlers,
            clients: Arc::new(Mutex::new(ClientPool::new())),
            faults: FaultStats::default(),
        }
    }

    pub fn register_handler<H: MessageHandler>(
        &mut self,
        msg_type: MessageType,
        handler: H,
    ) -> Result<(), HandlerRegistryError> {
        self.handlers.register(msg_type, handler)
    }

    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Shared handle to the client pool.
    pub fn clients(&self) -> Arc<Mutex<ClientPool>> {
        self.clients.clone()
    }

    pub fn get_clients(&self, topic: &str) -> Vec<Client> {
        self.lock_clients().get_clients(topic)
    }

    pub fn faults(&self) -> FaultCounts {
        self.faults.snapshot()
    }

    /// Processes a datagram from `from` and returns the bytes to send back,
    /// if any. Faults are logged and counted here and never propagate.
    pub fn handle_datagram(&self, data: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        match self.process(data, from) {
            Ok(reply) => reply.filter(|bytes| !bytes.is_empty()),
            Err(err) => {
                self.faults.record(&err);
                match err {
                    PacketError::HandlerAbsent(msg_type) => {
                        debug!("No handler for {} from {}, ignoring", msg_type, from);
                    }
                    err => warn!("Dropping packet from {}: {}", from, err),
                }
                None
            }
        }
    }

    /// Validates and dispatches a datagram without recording faults.
    pub fn process(&self, data: &[u8], from: SocketAddr) -> Result<Option<Vec<u8>>, PacketError> {
        let message = Message::decode(data).map_err(PacketError::Decode)?;

        if !message.verify_integrity() {
            return Err(PacketError::Integrity);
        }
        if !message.validate_type() {
            return Err(PacketError::UnsupportedType(message.msg_type().code()));
        }

        if message.msg_type() == MessageType::REGISTER {
            return self.register(&message, from).map(Some);
        }

        let handler = self
            .handlers
            .lookup(message.msg_type())
            .map_err(|_| PacketError::HandlerAbsent(message.msg_type()))?;
        let response = handler.handle(message.payload())?;
        Ok(Some(response))
    }

    fn register(&self, message: &Message, from: SocketAddr) -> Result<Vec<u8>, PacketError> {
        let topics = parse_topics(message.payload())?;
        let client = Client::active(from);

        {
            let mut pool = self.lock_clients();
            for topic in &topics {
                pool.add_client(topic, client);
            }
        }
        info!("{} registered for {}", from, topics.join(", "));

        Message::new(MessageType::REGISTERACK, format_topics(&topics))
            .encode()
            .map_err(PacketError::Encode)
    }

    fn lock_clients(&self) -> MutexGuard<'_, ClientPool> {
        self.clients.lock().unwrap_or_else(|e| e.into_inner())
    }
}
