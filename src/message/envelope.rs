use serde::{Deserialize, Serialize};

use super::checksum::generate_checksum;
use super::kind::MessageType;
use crate::utils::error::MessageError;

/// A message exchanged between the broker and its peers.
///
/// On the wire this is a JSON object:
///
/// ```text
/// {"type": 6, "checksum": "<sha256 hex>", "payload": "TOPICS: weather"}
/// ```
///
/// Decoding only checks structure. Callers decide what to do with a message
/// whose checksum does not match ([`Message::verify_integrity`]) or whose type
/// is outside the catalog ([`Message::validate_type`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    msg_type: MessageType,
    checksum: String,
    payload: String,
}

impl Message {
    /// Builds a message and stamps it with the checksum of `payload`.
    pub fn new(msg_type: MessageType, payload: impl Into<String>) -> Self {
        let payload = payload.into();
        let checksum = generate_checksum(&payload);
        Self {
            msg_type,
            checksum,
            payload,
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, MessageError> {
        serde_json::from_slice(data).map_err(MessageError::Decode)
    }

    pub fn encode(&self) -> Result<Vec<u8>, MessageError> {
        serde_json::to_vec(self).map_err(MessageError::Encode)
    }

    pub fn msg_type(&self) -> MessageType {
        self.msg_type
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// True when the carried checksum matches the payload.
    pub fn verify_integrity(&self) -> bool {
        generate_checksum(&self.payload) == self.checksum
    }

    /// True when the type is part of the catalog.
    pub fn validate_type(&self) -> bool {
        self.msg_type.is_known()
    }
}
