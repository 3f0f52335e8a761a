//! Scroll telemetry hub: one passive window scroll listener fanned out to any
//! number of subscribers, each with its own throttle and coalescing cycle.
//!
//! Scheduling decisions and arithmetic live in [`crate::scroll`]; this module
//! owns the listener lifecycle, the timers, and the reactive fan-out.

use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{ScrollDirection, ScrollMetrics},
    scroll::{scroll_progress, CoalescePlan, CoalescingGate, DirectionTracker},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-subscriber telemetry options.
pub struct ScrollSubscription {
    /// Delay before the frame-synchronized recomputation of a cycle. Zero
    /// schedules the frame callback immediately. Affects when this subscriber
    /// is notified, not what value it sees.
    pub throttle_ms: u32,
    /// Whether to derive [`ScrollDirection`] for this subscriber.
    pub track_direction: bool,
}

struct SubscriberSlot {
    id: u64,
    options: ScrollSubscription,
    gate: CoalescingGate,
    tracker: DirectionTracker,
    out: RwSignal<ScrollMetrics>,
    timer: Option<TimeoutHandle>,
}

struct ScrollListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[derive(Default)]
struct HubState {
    next_id: u64,
    slots: Vec<SubscriberSlot>,
    listener: Option<ScrollListener>,
}

#[derive(Clone, Default)]
/// Shared hub owning the single underlying scroll listener and the derived
/// snapshots. Subscribers receive read-only [`ScrollMetrics`] values.
pub struct ScrollTelemetryHub {
    inner: Rc<RefCell<HubState>>,
}

impl ScrollTelemetryHub {
    fn subscribe(&self, options: ScrollSubscription) -> (u64, RwSignal<ScrollMetrics>) {
        let (scroll_y, scrollable_height) = read_viewport().unwrap_or((0.0, 0.0));
        let mut tracker = DirectionTracker::default();
        if options.track_direction {
            // Seed so the first published direction compares against mount time.
            tracker.observe(scroll_y);
        }
        let out = create_rw_signal(ScrollMetrics {
            scroll_y,
            scroll_progress: scroll_progress(scroll_y, scrollable_height),
            direction: ScrollDirection::None,
        });

        let mut state = self.inner.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.slots.push(SubscriberSlot {
            id,
            options,
            gate: CoalescingGate::default(),
            tracker,
            out,
            timer: None,
        });
        if state.listener.is_none() {
            state.listener = attach_listener(&self.inner);
        }
        (id, out)
    }

    fn unsubscribe(&self, id: u64) {
        let mut state = self.inner.borrow_mut();
        if let Some(position) = state.slots.iter().position(|slot| slot.id == id) {
            let slot = state.slots.remove(position);
            if let Some(timer) = slot.timer {
                timer.clear();
            }
        }
        if state.slots.is_empty() {
            if let Some(listener) = state.listener.take() {
                detach_listener(listener);
            }
        }
    }
}

fn attach_listener(inner: &Rc<RefCell<HubState>>) -> Option<ScrollListener> {
    let window = web_sys::window()?;
    let inner = Rc::clone(inner);
    let closure =
        Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| on_scroll(&inner)));
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
    Some(ScrollListener { closure })
}

fn detach_listener(listener: ScrollListener) {
    if let Some(window) = web_sys::window() {
        let _ = window.remove_event_listener_with_callback(
            "scroll",
            listener.closure.as_ref().unchecked_ref(),
        );
    }
}

fn on_scroll(inner: &Rc<RefCell<HubState>>) {
    let plans: Vec<(u64, CoalescePlan)> = {
        let mut state = inner.borrow_mut();
        state
            .slots
            .iter_mut()
            .filter_map(|slot| {
                slot.gate
                    .request(slot.options.throttle_ms)
                    .map(|plan| (slot.id, plan))
            })
            .collect()
    };

    for (id, plan) in plans {
        match plan {
            CoalescePlan::NextFrame => {
                let inner = Rc::clone(inner);
                request_animation_frame(move || run_frame(&inner, id));
            }
            CoalescePlan::DelayThenFrame(throttle_ms) => {
                let timer_inner = Rc::clone(inner);
                let handle = set_timeout_with_handle(
                    move || {
                        let frame_inner = Rc::clone(&timer_inner);
                        request_animation_frame(move || run_frame(&frame_inner, id));
                    },
                    Duration::from_millis(u64::from(throttle_ms)),
                );
                if let Ok(handle) = handle {
                    let mut state = inner.borrow_mut();
                    match state.slots.iter_mut().find(|slot| slot.id == id) {
                        Some(slot) => slot.timer = Some(handle),
                        // Subscriber left between scheduling and now.
                        None => handle.clear(),
                    }
                }
            }
        }
    }
}

fn run_frame(inner: &Rc<RefCell<HubState>>, id: u64) {
    let Some((scroll_y, scrollable_height)) = read_viewport() else {
        return;
    };
    let published = {
        let mut state = inner.borrow_mut();
        // A stale frame callback for a removed subscriber is ignored.
        let Some(slot) = state.slots.iter_mut().find(|slot| slot.id == id) else {
            return;
        };
        let direction = if slot.options.track_direction {
            slot.tracker.observe(scroll_y)
        } else {
            ScrollDirection::None
        };
        slot.gate.settle();
        slot.timer = None;
        let metrics = ScrollMetrics {
            scroll_y,
            scroll_progress: scroll_progress(scroll_y, scrollable_height),
            direction,
        };
        (slot.out, metrics)
    };
    // Publish outside the borrow: setting the signal may re-enter the hub.
    published.0.set(published.1);
}

fn read_viewport() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let scrollable_height = f64::from(root.scroll_height()) - inner_height;
    Some((scroll_y, scrollable_height))
}

/// Installs the shared [`ScrollTelemetryHub`] into the reactive context.
pub fn provide_scroll_telemetry() {
    provide_context(ScrollTelemetryHub::default());
}

/// Subscribes the calling component to scroll telemetry.
///
/// The subscription is removed on component cleanup; the last unsubscribe
/// detaches the underlying listener and cancels any pending timer.
///
/// # Panics
///
/// Panics if called outside a tree that ran [`provide_scroll_telemetry`].
pub fn use_scroll_telemetry(options: ScrollSubscription) -> Signal<ScrollMetrics> {
    let hub = use_context::<ScrollTelemetryHub>().expect("ScrollTelemetryHub not provided");
    let (id, out) = hub.subscribe(options);
    on_cleanup(move || hub.unsubscribe(id));
    out.into()
}

/// Convenience subscription for consumers that only need progress.
pub fn use_scroll_progress(throttle_ms: u32) -> Signal<f64> {
    let metrics = use_scroll_telemetry(ScrollSubscription {
        throttle_ms,
        track_direction: false,
    });
    Signal::derive(move || metrics.get().scroll_progress)
}
