//! The `client` module defines the representation of a registered client and
//! the topic-keyed pool that tracks subscriptions.
//!
//! A [`Client`] is identified by its UDP address together with its state.
//! The [`ClientPool`] maps each topic to the clients that registered for it.

#[allow(clippy::module_inception)]
pub mod client;
pub mod pool;

pub use client::{Client, ClientState};
pub use pool::ClientPool;
