//! The `message` module defines the envelope exchanged over the wire.
//!
//! A message carries a type code, a checksum of its payload and the payload
//! itself. Integrity and type validity are separate predicates so the server
//! can tell a corrupted packet apart from an unsupported one.

pub mod checksum;
pub mod envelope;
pub mod kind;

pub use envelope::Message;
pub use kind::{CATALOG, MessageType};
