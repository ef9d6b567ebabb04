//! The `handlers` module maps message types to the logic that answers them.
//!
//! `REGISTER` is handled by the broker itself; every other catalog type is
//! dispatched through a [`HandlerRegistry`]. A type without a handler is
//! valid but produces no reply.

pub mod builtin;
pub mod registry;

pub use registry::{HandlerRegistry, HandlerResult, MessageHandler};

#[cfg(test)]
mod tests;
