//! Pure scroll arithmetic and the event-coalescing gate.
//!
//! The telemetry hub keeps all browser interaction in [`crate::telemetry`];
//! the math and scheduling decisions live here so they run under native tests.

use crate::model::ScrollDirection;

/// Normalized scroll progress.
///
/// Returns `0` when the page is not scrollable (`scrollable_height <= 0`),
/// never `NaN` or a negative value.
pub fn scroll_progress(scroll_y: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable_height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the next recomputation should be scheduled.
pub enum CoalescePlan {
    /// Request an animation-frame callback immediately.
    NextFrame,
    /// Wait the given throttle in milliseconds, then request a frame callback.
    DelayThenFrame(u32),
}

#[derive(Debug, Clone, Copy, Default)]
/// Collapses bursts of scroll events into one scheduled recomputation per
/// cycle. While a cycle is pending, further events are absorbed.
pub struct CoalescingGate {
    pending: bool,
}

impl CoalescingGate {
    /// Records a scroll event. Returns a scheduling plan for the first event
    /// of a cycle and `None` while a cycle is already pending.
    pub fn request(&mut self, throttle_ms: u32) -> Option<CoalescePlan> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(if throttle_ms == 0 {
            CoalescePlan::NextFrame
        } else {
            CoalescePlan::DelayThenFrame(throttle_ms)
        })
    }

    /// Ends the current cycle; the next scroll event schedules a new one.
    pub fn settle(&mut self) {
        self.pending = false;
    }

    /// Whether a recomputation is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Derives scroll direction by comparing successive samples.
pub struct DirectionTracker {
    last_y: Option<f64>,
}

impl DirectionTracker {
    /// Folds in a new sample and returns the movement since the previous one.
    pub fn observe(&mut self, scroll_y: f64) -> ScrollDirection {
        let direction = match self.last_y {
            Some(last) if scroll_y > last => ScrollDirection::Down,
            Some(last) if scroll_y < last => ScrollDirection::Up,
            _ => ScrollDirection::None,
        };
        self.last_y = Some(scroll_y);
        direction
    }
}
