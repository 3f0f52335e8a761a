//! AI message-drafting contracts and the local demo adapter.

use std::{future::Future, pin::Pin};

use serde::Serialize;
use thiserror::Error;

/// Object-safe boxed future used by [`MessageDraftService`].
pub type DraftFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Inputs for drafting a short outreach message.
pub struct DraftRequest {
    /// The visitor's name, written into the drafted message.
    pub name: String,
    /// What the visitor wants to talk about.
    pub interest: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Drafting failures surfaced to the contact form as status text.
pub enum DraftError {
    /// The generation endpoint rejected the request.
    #[error("draft endpoint returned status {0}")]
    Status(u16),
    /// The request never reached the endpoint.
    #[error("draft request failed: {0}")]
    Transport(String),
    /// The endpoint answered without any usable text.
    #[error("draft endpoint returned no text")]
    EmptyResponse,
}

/// Host service that generates a short contact-message draft.
///
/// Treated as an opaque remote call: one attempt, no retry.
pub trait MessageDraftService {
    /// Produces a drafted message body for the given request.
    fn draft<'a>(&'a self, request: &'a DraftRequest) -> DraftFuture<'a, Result<String, DraftError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Local fallback used when no generation API key is configured. Produces a
/// canned draft from the request fields without a network call.
pub struct DemoDraftService;

impl MessageDraftService for DemoDraftService {
    fn draft<'a>(
        &'a self,
        request: &'a DraftRequest,
    ) -> DraftFuture<'a, Result<String, DraftError>> {
        Box::pin(async move {
            Ok(format!(
                "Hi, I'm {} and I'd love to connect about {}. Your work caught my eye and I \
                 think there could be a great fit here. Would you be open to a quick chat?",
                request.name, request.interest
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn demo_draft_mentions_name_and_interest() {
        let request = DraftRequest {
            name: "Jane".into(),
            interest: "a web project".into(),
        };
        let draft = block_on(DemoDraftService.draft(&request)).expect("demo draft");
        assert!(draft.contains("Jane"), "draft should mention the name: {draft}");
        assert!(draft.contains("a web project"), "draft should mention the interest: {draft}");
        assert_eq!(block_on(DemoDraftService.draft(&request)), Ok(draft));
    }
}
