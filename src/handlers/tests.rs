use super::builtin::{echo, pong};
use super::registry::{HandlerRegistry, HandlerResult, MessageHandler};
use crate::message::{Message, MessageType};
use crate::utils::error::{HandlerError, HandlerRegistryError};

struct Fixed(&'static str);

impl MessageHandler for Fixed {
    fn handle(&self, _payload: &str) -> HandlerResult {
        Ok(self.0.as_bytes().to_vec())
    }
}

#[test]
fn test_register_and_lookup() {
    let mut registry = HandlerRegistry::new();
    registry.register(MessageType::TEST, echo).unwrap();

    let handler = registry.lookup(MessageType::TEST).unwrap();
    assert_eq!(handler.handle("abc").unwrap(), b"abc");
}

#[test]
fn test_register_duplicate_fails_and_keeps_original() {
    let mut registry = HandlerRegistry::new();
    registry.register(MessageType::TEST, Fixed("first")).unwrap();

    let err = registry
        .register(MessageType::TEST, Fixed("second"))
        .unwrap_err();
    assert_eq!(err, HandlerRegistryError::DuplicateHandler(MessageType::TEST));

    let handler = registry.lookup(MessageType::TEST).unwrap();
    assert_eq!(handler.handle("").unwrap(), b"first");
}

#[test]
fn test_unregister() {
    let mut registry = HandlerRegistry::new();
    registry.register(MessageType::CONTROL, echo).unwrap();
    registry.unregister(MessageType::CONTROL).unwrap();

    assert!(matches!(
        registry.lookup(MessageType::CONTROL),
        Err(HandlerRegistryError::NotFound(MessageType::CONTROL))
    ));
    assert_eq!(
        registry.unregister(MessageType::CONTROL).unwrap_err(),
        HandlerRegistryError::NotFound(MessageType::CONTROL)
    );

    // The slot is free again.
    registry.register(MessageType::CONTROL, echo).unwrap();
}

#[test]
fn test_lookup_missing() {
    let registry = HandlerRegistry::default();
    assert!(registry.lookup(MessageType::PING).is_err());
    assert!(registry.registered_types().is_empty());
}

#[test]
fn test_closure_handler_and_errors() {
    let mut registry = HandlerRegistry::new();
    registry
        .register(MessageType::SHUTDOWN, |payload: &str| -> HandlerResult {
            if payload.is_empty() {
                Err(HandlerError::new("empty payload"))
            } else {
                Ok(payload.to_uppercase().into_bytes())
            }
        })
        .unwrap();
    registry.register(MessageType::PING, pong).unwrap();

    let handler = registry.lookup(MessageType::SHUTDOWN).unwrap();
    assert_eq!(handler.handle("now").unwrap(), b"NOW");
    assert_eq!(handler.handle("").unwrap_err().0, "empty payload");
    assert_eq!(
        registry.registered_types(),
        vec![MessageType::PING, MessageType::SHUTDOWN]
    );
}

#[test]
fn test_pong_handler_builds_envelope() {
    let reply = pong("are you there").unwrap();
    let msg = Message::decode(&reply).unwrap();
    assert_eq!(msg.msg_type(), MessageType::PONG);
    assert_eq!(msg.payload(), "are you there");
    assert!(msg.verify_integrity());
}
