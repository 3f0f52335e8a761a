//! External URL adapter for the browser context.

use site_host::{ExternalUrlFuture, ExternalUrlService};

use crate::interop;

#[derive(Debug, Clone, Copy, Default)]
/// Opens URLs in a new tab via `window.open`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { interop::open_external_url(url).await })
    }
}
