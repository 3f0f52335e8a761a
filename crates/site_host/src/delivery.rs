//! Contact-message delivery contracts and the local demo adapter.

use std::{future::Future, pin::Pin};

use serde::Serialize;
use thiserror::Error;

/// Object-safe boxed future used by [`MessageDeliveryService`].
pub type DeliveryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A contact-form submission handed to the delivery service.
pub struct OutboundMessage {
    /// Sender display name.
    pub from_name: String,
    /// Sender reply address.
    pub from_email: String,
    /// Message body.
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Acknowledgment returned by a successful delivery.
pub enum DeliveryReceipt {
    /// The message was handed to the configured delivery endpoint.
    Sent,
    /// No endpoint is configured; the message was acknowledged locally.
    DemoAccepted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Delivery failures surfaced to the contact form as status text.
pub enum DeliveryError {
    /// The delivery endpoint rejected the request.
    #[error("delivery endpoint returned status {0}")]
    Status(u16),
    /// The request never reached the endpoint.
    #[error("delivery request failed: {0}")]
    Transport(String),
}

/// Host service that accepts contact-form submissions.
pub trait MessageDeliveryService {
    /// Delivers one outbound message, resolving asynchronously.
    fn deliver<'a>(
        &'a self,
        message: &'a OutboundMessage,
    ) -> DeliveryFuture<'a, Result<DeliveryReceipt, DeliveryError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Local fallback used when no delivery endpoint is configured. Accepts every
/// message without a network call.
pub struct DemoDeliveryService;

impl MessageDeliveryService for DemoDeliveryService {
    fn deliver<'a>(
        &'a self,
        _message: &'a OutboundMessage,
    ) -> DeliveryFuture<'a, Result<DeliveryReceipt, DeliveryError>> {
        Box::pin(async { Ok(DeliveryReceipt::DemoAccepted) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn outbound_message_serializes_to_the_delivery_wire_shape() {
        let message = OutboundMessage {
            from_name: "Jane Smith".into(),
            from_email: "jane@example.com".into(),
            body: "Hello!".into(),
        };
        let payload = serde_json::to_value(&message).expect("serialize");
        assert_eq!(
            payload,
            serde_json::json!({
                "from_name": "Jane Smith",
                "from_email": "jane@example.com",
                "body": "Hello!",
            })
        );
    }

    #[test]
    fn demo_delivery_acknowledges_locally() {
        let message = OutboundMessage {
            from_name: "Jane Smith".into(),
            from_email: "jane@example.com".into(),
            body: "Hello!".into(),
        };
        let receipt = block_on(DemoDeliveryService.deliver(&message)).expect("demo delivery");
        assert_eq!(receipt, DeliveryReceipt::DemoAccepted);
    }
}
