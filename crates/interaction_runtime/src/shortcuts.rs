//! Global keyboard shortcut mapping for the launcher.
//!
//! The window-level `keydown` listener lives in the runtime provider; this
//! module is the pure event-to-action mapper behind it.

use crate::{model::LauncherState, reducer::LauncherAction};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The parts of a keydown event the mapper cares about.
pub struct KeyChord {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyChord {
    /// Extracts a chord from a browser keyboard event.
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            meta: ev.meta_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A matched shortcut: the action to dispatch and whether the browser's
/// default handling must be suppressed.
pub struct ShortcutDecision {
    pub action: LauncherAction,
    pub suppress_default: bool,
}

fn decision(action: LauncherAction) -> Option<ShortcutDecision> {
    Some(ShortcutDecision {
        action,
        suppress_default: true,
    })
}

/// Maps a keydown chord to a launcher action.
///
/// The modifier-plus-`K` toggle works regardless of launcher state and always
/// suppresses the browser default. Everything else is active only while the
/// launcher is open; in particular, `Escape` is not intercepted while closed
/// so it stays available to the rest of the page.
pub fn action_for_chord(chord: &KeyChord, launcher: &LauncherState) -> Option<ShortcutDecision> {
    if (chord.meta || chord.ctrl) && !chord.alt && chord.key.eq_ignore_ascii_case("k") {
        return decision(LauncherAction::Toggle);
    }

    if !launcher.is_open {
        return None;
    }

    match chord.key.as_str() {
        "Escape" => decision(LauncherAction::Close),
        "ArrowDown" => decision(LauncherAction::SelectNext),
        "ArrowUp" => decision(LauncherAction::SelectPrevious),
        "Enter" => decision(LauncherAction::ActivateSelection),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chord(key: &str) -> KeyChord {
        KeyChord {
            key: key.to_string(),
            meta: false,
            ctrl: false,
            alt: false,
        }
    }

    fn open_state() -> LauncherState {
        LauncherState {
            is_open: true,
            ..LauncherState::default()
        }
    }

    #[test]
    fn either_platform_modifier_with_k_toggles() {
        let closed = LauncherState::default();
        for (meta, ctrl) in [(true, false), (false, true)] {
            let chord = KeyChord {
                key: "k".to_string(),
                meta,
                ctrl,
                alt: false,
            };
            assert_eq!(
                action_for_chord(&chord, &closed),
                Some(ShortcutDecision {
                    action: LauncherAction::Toggle,
                    suppress_default: true,
                })
            );
        }

        // Shifted variant still matches; a bare `k` does not.
        let shifted = KeyChord {
            key: "K".to_string(),
            meta: true,
            ctrl: false,
            alt: false,
        };
        assert!(action_for_chord(&shifted, &closed).is_some());
        assert_eq!(action_for_chord(&chord("k"), &closed), None);
    }

    #[test]
    fn escape_is_only_intercepted_while_open() {
        assert_eq!(action_for_chord(&chord("Escape"), &LauncherState::default()), None);
        assert_eq!(
            action_for_chord(&chord("Escape"), &open_state()),
            Some(ShortcutDecision {
                action: LauncherAction::Close,
                suppress_default: true,
            })
        );
    }

    #[test]
    fn navigation_keys_map_only_while_open() {
        let closed = LauncherState::default();
        assert_eq!(action_for_chord(&chord("ArrowDown"), &closed), None);
        assert_eq!(action_for_chord(&chord("Enter"), &closed), None);

        let open = open_state();
        assert_eq!(
            action_for_chord(&chord("ArrowDown"), &open).map(|d| d.action),
            Some(LauncherAction::SelectNext)
        );
        assert_eq!(
            action_for_chord(&chord("ArrowUp"), &open).map(|d| d.action),
            Some(LauncherAction::SelectPrevious)
        );
        assert_eq!(
            action_for_chord(&chord("Enter"), &open).map(|d| d.action),
            Some(LauncherAction::ActivateSelection)
        );
        assert_eq!(action_for_chord(&chord("a"), &open), None);
    }
}
