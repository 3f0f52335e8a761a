//! Fetch-backed contact delivery adapter.

use site_host::{
    DeliveryError, DeliveryFuture, DeliveryReceipt, MessageDeliveryService, OutboundMessage,
};

use crate::interop;

#[derive(Debug, Clone)]
/// Delivers contact messages by POSTing them to a configured HTTP endpoint.
pub struct HttpDeliveryService {
    endpoint: String,
}

impl HttpDeliveryService {
    /// Creates an adapter targeting `endpoint`.
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

/// Maps an HTTP status to a delivery outcome.
pub(crate) fn receipt_for_status(status: u16) -> Result<DeliveryReceipt, DeliveryError> {
    if (200..300).contains(&status) {
        Ok(DeliveryReceipt::Sent)
    } else {
        Err(DeliveryError::Status(status))
    }
}

impl MessageDeliveryService for HttpDeliveryService {
    fn deliver<'a>(
        &'a self,
        message: &'a OutboundMessage,
    ) -> DeliveryFuture<'a, Result<DeliveryReceipt, DeliveryError>> {
        Box::pin(async move {
            let body = serde_json::to_string(message)
                .map_err(|err| DeliveryError::Transport(err.to_string()))?;
            let (status, _text) = interop::post_json(&self.endpoint, &body)
                .await
                .map_err(DeliveryError::Transport)?;
            receipt_for_status(status)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn two_xx_statuses_count_as_sent() {
        assert_eq!(receipt_for_status(200), Ok(DeliveryReceipt::Sent));
        assert_eq!(receipt_for_status(204), Ok(DeliveryReceipt::Sent));
        assert_eq!(receipt_for_status(302), Err(DeliveryError::Status(302)));
        assert_eq!(receipt_for_status(500), Err(DeliveryError::Status(500)));
    }

    #[test]
    fn delivery_off_wasm_reports_a_transport_error() {
        let service = HttpDeliveryService::new("https://example.test/contact".into());
        let message = OutboundMessage {
            from_name: "Jane".into(),
            from_email: "jane@example.com".into(),
            body: "Hi".into(),
        };
        let result = futures::executor::block_on(service.deliver(&message));
        assert!(matches!(result, Err(DeliveryError::Transport(_))));
    }
}
