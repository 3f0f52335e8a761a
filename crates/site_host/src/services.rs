//! Host service bundle injected into the interaction runtime.

use std::rc::Rc;

use crate::{
    delivery::{DemoDeliveryService, MessageDeliveryService},
    draft::{DemoDraftService, MessageDraftService},
    external_url::{ExternalUrlService, NoopExternalUrlService},
};

#[derive(Clone)]
/// The full set of host services the site depends on.
pub struct HostServices {
    external_urls: Rc<dyn ExternalUrlService>,
    delivery: Rc<dyn MessageDeliveryService>,
    drafts: Rc<dyn MessageDraftService>,
}

impl HostServices {
    /// Bundles concrete service adapters.
    pub fn new(
        external_urls: Rc<dyn ExternalUrlService>,
        delivery: Rc<dyn MessageDeliveryService>,
        drafts: Rc<dyn MessageDraftService>,
    ) -> Self {
        Self {
            external_urls,
            delivery,
            drafts,
        }
    }

    /// Fully local bundle: no-op URL opening, demo delivery, demo drafting.
    pub fn demo() -> Self {
        Self::new(
            Rc::new(NoopExternalUrlService),
            Rc::new(DemoDeliveryService),
            Rc::new(DemoDraftService),
        )
    }

    /// Returns the configured external URL service.
    pub fn external_urls(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the configured contact delivery service.
    pub fn delivery(&self) -> Rc<dyn MessageDeliveryService> {
        self.delivery.clone()
    }

    /// Returns the configured message drafting service.
    pub fn drafts(&self) -> Rc<dyn MessageDraftService> {
        self.drafts.clone()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::delivery::{DeliveryReceipt, OutboundMessage};

    #[test]
    fn demo_bundle_resolves_every_service_locally() {
        let services = HostServices::demo();

        assert_eq!(block_on(services.external_urls().open_url("https://example.test")), Ok(()));

        let message = OutboundMessage {
            from_name: "Jane".into(),
            from_email: "jane@example.com".into(),
            body: "Hi".into(),
        };
        assert_eq!(
            block_on(services.delivery().deliver(&message)),
            Ok(DeliveryReceipt::DemoAccepted)
        );

        let draft = block_on(services.drafts().draft(&crate::draft::DraftRequest {
            name: "Jane".into(),
            interest: "a web project".into(),
        }));
        assert!(draft.is_ok());
    }
}
