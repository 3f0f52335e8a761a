//! Client-side interaction engine for the portfolio site.
//!
//! Two concerns live here: the keyboard-driven command launcher (registry,
//! filter/navigation reducer, global shortcut dispatcher, palette UI) and the
//! shared scroll telemetry hub that coalesces scroll events into one
//! frame-synchronized signal consumed by the display layer.

pub mod components;
pub mod effect_executor;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod scroll;
pub mod shortcuts;
pub mod telemetry;

pub use components::{CommandPalette, SEARCH_INPUT_ID};
pub use model::{
    Command, CommandAction, CommandCategory, CommandId, LauncherState, ScrollDirection,
    ScrollMetrics,
};
pub use reducer::{reduce_launcher, LauncherAction, LauncherEffect};
pub use registry::{build_commands, filtered_commands};
pub use runtime_context::{use_interaction_runtime, InteractionProvider, InteractionRuntimeContext};
pub use telemetry::{
    provide_scroll_telemetry, use_scroll_progress, use_scroll_telemetry, ScrollSubscription,
    ScrollTelemetryHub,
};
