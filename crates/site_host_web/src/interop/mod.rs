//! Shared browser interop for host adapters.
//!
//! Routes calls to target-specific implementations while keeping a uniform
//! API for the adapter modules above.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Opens a URL in a new browsing context.
pub async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}

/// POSTs a JSON body and returns `(status, response_text)`.
pub async fn post_json(url: &str, body: &str) -> Result<(u16, String), String> {
    imp::post_json(url, body).await
}
