//! State and command models for the client-side interaction engine.

use site_content::SectionId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Stable identifier of a launcher command.
pub struct CommandId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Closed set of command sources surfaced in the launcher.
pub enum CommandCategory {
    Navigation,
    Project,
    Social,
}

impl CommandCategory {
    /// Label shown next to a command row.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Project => "Project",
            Self::Social => "Social",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What executing a command does. Execution side effects are carried as
/// reducer-emitted [`LauncherEffect`](crate::reducer::LauncherEffect) values,
/// never performed inside the state machine.
pub enum CommandAction {
    /// Smooth-scroll the document to a section anchor.
    ScrollToSection(SectionId),
    /// Open an external resource in a new context. `None` marks a command
    /// that is listed but inert (a project without a live URL).
    OpenExternalUrl(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An invocable entry in the command launcher. Immutable once built; the
/// registry rebuilds the full list instead of mutating entries.
pub struct Command {
    pub id: CommandId,
    pub display_name: String,
    pub category: CommandCategory,
    pub action: CommandAction,
    /// Presentation icon handle, opaque to the engine.
    pub icon_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Launcher open/query/selection state.
///
/// `active_index` always addresses the current filtered list, or `0` when the
/// list is empty; any query change resets it to `0`.
pub struct LauncherState {
    pub is_open: bool,
    pub query: String,
    pub active_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Scroll movement since the previous published sample.
pub enum ScrollDirection {
    Up,
    Down,
    /// First sample, no movement, or direction tracking disabled.
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Read-only scroll snapshot published by the telemetry hub.
pub struct ScrollMetrics {
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
    /// Normalized progress through the scrollable height, clamped to `[0, 1]`.
    pub scroll_progress: f64,
    pub direction: ScrollDirection,
}
