//! Explicit effect-queue executor for reducer-emitted launcher effects.

use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsCast;

use crate::{components::SEARCH_INPUT_ID, reducer::LauncherEffect, InteractionRuntimeContext};

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(runtime: InteractionRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, effect);
        }
    });
}

fn run_effect(runtime: InteractionRuntimeContext, effect: LauncherEffect) {
    match effect {
        LauncherEffect::ScrollToSection(section) => scroll_to_anchor(section.anchor()),
        LauncherEffect::OpenExternalUrl(url) => {
            let services = runtime.host.get_value();
            spawn_local(async move {
                if let Err(err) = services.external_urls().open_url(&url).await {
                    logging::warn!("failed to open external url: {err}");
                }
            });
        }
        LauncherEffect::FocusSearchInput => {
            // The input mounts on the same tick the open transition commits;
            // defer one task so the element exists before focusing.
            set_timeout(
                || focus_element_by_id(SEARCH_INPUT_ID),
                Duration::from_millis(0),
            );
        }
    }
}

fn scroll_to_anchor(anchor: &str) {
    let Some(element) = document().get_element_by_id(anchor) else {
        logging::warn!("missing section anchor: {anchor}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn focus_element_by_id(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = element.focus();
    }
}
