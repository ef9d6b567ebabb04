use std::fmt;

use serde::{Deserialize, Serialize};

/// Code identifying the kind of a [`Message`](super::Message).
///
/// Any `u8` can travel on the wire; only codes present in [`CATALOG`] are
/// dispatchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageType(pub u8);

impl MessageType {
    /// Used for testing the connection.
    pub const TEST: MessageType = MessageType(0x00);
    /// Liveliness check of the recipient.
    pub const PING: MessageType = MessageType(0x01);
    pub const SHUTDOWN: MessageType = MessageType(0x02);
    pub const CLOSE: MessageType = MessageType(0x03);
    pub const MAINTENANCE: MessageType = MessageType(0x04);
    /// Switches a client from maintenance back to operational mode.
    pub const CONTROL: MessageType = MessageType(0x05);
    /// Subscribes the sender to the topics listed in the payload.
    pub const REGISTER: MessageType = MessageType(0x06);
    pub const PONG: MessageType = MessageType(0x07);
    pub const REGISTERACK: MessageType = MessageType(0x08);

    pub fn code(self) -> u8 {
        self.0
    }

    /// Catalog name of this type, `None` when the code is not supported.
    pub fn name(self) -> Option<&'static str> {
        CATALOG
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
    }

    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<u8> for MessageType {
    fn from(code: u8) -> Self {
        MessageType(code)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{:#04x}", self.0),
        }
    }
}

/// Every supported message type. Extend by appending entries.
pub const CATALOG: [(MessageType, &str); 9] = [
    (MessageType::TEST, "TEST"),
    (MessageType::PING, "PING"),
    (MessageType::SHUTDOWN, "SHUTDOWN"),
    (MessageType::CLOSE, "CLOSE"),
    (MessageType::MAINTENANCE, "MAINTENANCE"),
    (MessageType::CONTROL, "CONTROL"),
    (MessageType::REGISTER, "REGISTER"),
    (MessageType::PONG, "PONG"),
    (MessageType::REGISTERACK, "REGISTERACK"),
];
