//! Page chrome driven by the shared scroll telemetry signal: the progress
//! bar, the parallax grid background, scroll-reveal wrappers, and the
//! spotlight cursor.
//!
//! Each element maps the published snapshot to a visual parameter through a
//! pure function; none of them reads raw scroll position directly.

use leptos::*;
use interaction_runtime::use_scroll_progress;

/// Vertical parallax offset in CSS pixels for a layer of the given depth.
pub(crate) fn parallax_offset_px(progress: f64, depth_px: f64) -> f64 {
    -progress * depth_px
}

/// Opacity of a reveal block: ramps from 0 to 1 as progress crosses
/// `[start, start + span]`.
pub(crate) fn reveal_opacity(progress: f64, start: f64, span: f64) -> f64 {
    if span <= 0.0 {
        return 1.0;
    }
    ((progress - start) / span).clamp(0.0, 1.0)
}

#[component]
/// Thin bar along the top edge that fills as the page scrolls.
pub(crate) fn ScrollProgressBar() -> impl IntoView {
    let progress = use_scroll_progress(8);
    view! {
        <div
            class="scroll-progress-bar"
            style=move || format!("transform: scaleX({:.4});", progress.get())
        />
    }
}

#[component]
/// Decorative grid layer that drifts upward slower than the content.
pub(crate) fn GridBackground() -> impl IntoView {
    let progress = use_scroll_progress(32);
    view! {
        <div
            class="grid-background"
            aria-hidden="true"
            style=move || {
                format!(
                    "transform: translateY({:.1}px);",
                    parallax_offset_px(progress.get(), 120.0)
                )
            }
        />
    }
}

#[component]
/// Fades and lifts its children in once scroll progress passes `start`.
pub(crate) fn Reveal(#[prop(default = 0.0)] start: f64, children: Children) -> impl IntoView {
    let progress = use_scroll_progress(32);
    let style = move || {
        let opacity = reveal_opacity(progress.get(), start, 0.12);
        format!(
            "opacity: {opacity:.3}; transform: translateY({:.1}px);",
            (1.0 - opacity) * 24.0
        )
    };
    view! { <div class="reveal" style=style>{children()}</div> }
}

#[component]
/// Soft radial highlight that follows the pointer.
pub(crate) fn SpotlightCursor() -> impl IntoView {
    let position = create_rw_signal((0.0_f64, 0.0_f64));
    let pointer_listener = window_event_listener(ev::pointermove, move |ev| {
        position.set((f64::from(ev.client_x()), f64::from(ev.client_y())));
    });
    on_cleanup(move || pointer_listener.remove());

    view! {
        <div
            class="spotlight-cursor"
            aria-hidden="true"
            style=move || {
                let (x, y) = position.get();
                format!(
                    "background: radial-gradient(600px at {x:.0}px {y:.0}px, rgba(139, 92, 246, 0.12), transparent 80%);"
                )
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parallax_offset_scales_linearly_with_progress() {
        assert_eq!(parallax_offset_px(0.0, 120.0), 0.0);
        assert_eq!(parallax_offset_px(0.5, 120.0), -60.0);
        assert_eq!(parallax_offset_px(1.0, 120.0), -120.0);
    }

    #[test]
    fn reveal_opacity_ramps_and_clamps() {
        assert_eq!(reveal_opacity(0.0, 0.2, 0.1), 0.0);
        assert_eq!(reveal_opacity(0.25, 0.2, 0.1), 0.5);
        assert_eq!(reveal_opacity(0.9, 0.2, 0.1), 1.0);
        // Degenerate span never divides by zero.
        assert_eq!(reveal_opacity(0.5, 0.2, 0.0), 1.0);
    }
}
