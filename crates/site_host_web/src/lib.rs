//! Browser adapters for the `site_host` service contracts.
//!
//! Each adapter routes through the [`interop`] layer, which compiles for both
//! wasm32 and native targets; off-wasm the network calls report transport
//! errors and URL opening degrades to a no-op.

mod delivery;
mod draft;
mod external_url;
mod interop;

use std::rc::Rc;

use site_host::{DemoDeliveryService, DemoDraftService, HostServices, SiteHostConfig};

pub use delivery::HttpDeliveryService;
pub use draft::GeminiDraftService;
pub use external_url::WebExternalUrlService;

/// Stable name of the delivery strategy selected for `config`.
pub fn delivery_strategy_name(config: &SiteHostConfig) -> &'static str {
    if config.has_delivery() {
        "http"
    } else {
        "demo"
    }
}

/// Stable name of the drafting strategy selected for `config`.
pub fn draft_strategy_name(config: &SiteHostConfig) -> &'static str {
    if config.has_draft() {
        "gemini"
    } else {
        "demo"
    }
}

/// Assembles the browser host-service bundle for the given configuration.
///
/// Unconfigured services fall back to their local demo adapters.
pub fn host_services(config: &SiteHostConfig) -> HostServices {
    let delivery: Rc<dyn site_host::MessageDeliveryService> = match &config.delivery_endpoint {
        Some(endpoint) if config.has_delivery() => {
            Rc::new(HttpDeliveryService::new(endpoint.clone()))
        }
        _ => Rc::new(DemoDeliveryService),
    };
    let drafts: Rc<dyn site_host::MessageDraftService> = match &config.draft_api_key {
        Some(key) if config.has_draft() => Rc::new(GeminiDraftService::new(key.clone())),
        _ => Rc::new(DemoDraftService),
    };
    HostServices::new(Rc::new(WebExternalUrlService), delivery, drafts)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_configuration_selects_the_demo_strategies() {
        let config = SiteHostConfig::default();
        assert_eq!(delivery_strategy_name(&config), "demo");
        assert_eq!(draft_strategy_name(&config), "demo");

        let config = SiteHostConfig {
            delivery_endpoint: Some("https://example.test/contact".into()),
            draft_api_key: Some("key".into()),
        };
        assert_eq!(delivery_strategy_name(&config), "http");
        assert_eq!(draft_strategy_name(&config), "gemini");
    }
}
