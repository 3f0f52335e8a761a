//! Typed host-service contracts for the portfolio site.
//!
//! This crate is the API boundary between the interaction runtime and the
//! browser environment. It defines the external-URL, contact-delivery, and
//! message-drafting service traits together with demo adapters that resolve
//! locally, while the concrete browser adapters live in `site_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod delivery;
pub mod draft;
pub mod external_url;
mod services;

pub use config::SiteHostConfig;
pub use delivery::{
    DeliveryError, DeliveryFuture, DeliveryReceipt, DemoDeliveryService, MessageDeliveryService,
    OutboundMessage,
};
pub use draft::{DemoDraftService, DraftError, DraftFuture, DraftRequest, MessageDraftService};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use services::HostServices;
