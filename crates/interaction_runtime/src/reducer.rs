//! Reducer actions, side-effect intents, and transition logic for the
//! command launcher.
//!
//! The reducer is the authoritative state machine for launcher open/close,
//! query, and selection. It is pure and total: every action maps to a defined
//! transition over [`LauncherState`], and side effects leave as
//! [`LauncherEffect`] intents executed by the runtime shell.

use site_content::SectionId;

use crate::{
    model::{Command, CommandAction, LauncherState},
    registry::filtered_commands,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_launcher`] to mutate [`LauncherState`].
pub enum LauncherAction {
    /// Open the launcher, resetting query and selection. No-op while open.
    Open,
    /// Close the launcher and clear the query.
    Close,
    /// Toggle between open and closed.
    Toggle,
    /// Replace the query text, resetting the selection.
    SetQuery(String),
    /// Move the selection down, wrapping past the end.
    SelectNext,
    /// Move the selection up, wrapping before the start.
    SelectPrevious,
    /// Point the selection at a filtered-list position (hover).
    PointAt(usize),
    /// Execute the selected command, if any.
    ActivateSelection,
    /// Execute the command at a filtered-list position (click).
    ActivateAt(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_launcher`] for the shell to execute.
pub enum LauncherEffect {
    /// Smooth-scroll the document to a section anchor.
    ScrollToSection(SectionId),
    /// Open an external URL in a new context.
    OpenExternalUrl(String),
    /// Move focus into the launcher's search input.
    FocusSearchInput,
}

/// Applies a [`LauncherAction`] to the launcher state and collects resulting
/// side effects.
///
/// `commands` is the current registry snapshot, read-only; the filtered list
/// is derived from it and the current query. All keyboard-driven actions are
/// inert while the launcher is closed, and selection/activation actions are
/// no-ops when the filtered list is empty.
pub fn reduce_launcher(
    state: &mut LauncherState,
    commands: &[Command],
    action: LauncherAction,
) -> Vec<LauncherEffect> {
    let mut effects = Vec::new();
    match action {
        LauncherAction::Open => {
            if !state.is_open {
                state.is_open = true;
                state.query.clear();
                state.active_index = 0;
                effects.push(LauncherEffect::FocusSearchInput);
            }
        }
        LauncherAction::Close => {
            close(state);
        }
        LauncherAction::Toggle => {
            let next = if state.is_open {
                LauncherAction::Close
            } else {
                LauncherAction::Open
            };
            effects.extend(reduce_launcher(state, commands, next));
        }
        LauncherAction::SetQuery(query) => {
            if state.is_open {
                state.query = query;
                state.active_index = 0;
            }
        }
        LauncherAction::SelectNext => {
            if state.is_open {
                let len = filtered_commands(commands, &state.query).len();
                if len > 0 {
                    state.active_index = (state.active_index + 1) % len;
                }
            }
        }
        LauncherAction::SelectPrevious => {
            if state.is_open {
                let len = filtered_commands(commands, &state.query).len();
                if len > 0 {
                    state.active_index = (state.active_index + len - 1) % len;
                }
            }
        }
        LauncherAction::PointAt(index) => {
            if state.is_open && index < filtered_commands(commands, &state.query).len() {
                state.active_index = index;
            }
        }
        LauncherAction::ActivateSelection => {
            let index = state.active_index;
            effects.extend(activate(state, commands, index));
        }
        LauncherAction::ActivateAt(index) => {
            effects.extend(activate(state, commands, index));
        }
    }
    effects
}

/// Executes the filtered command at `index` and closes the launcher in the
/// same transition. No-op when closed or when the index has no command.
fn activate(state: &mut LauncherState, commands: &[Command], index: usize) -> Vec<LauncherEffect> {
    if !state.is_open {
        return Vec::new();
    }
    let filtered = filtered_commands(commands, &state.query);
    let Some(command) = filtered.get(index) else {
        return Vec::new();
    };
    let effects = execution_effects(command);
    close(state);
    effects
}

fn close(state: &mut LauncherState) {
    state.is_open = false;
    state.query.clear();
    state.active_index = 0;
}

/// Effects produced by executing a command. An `OpenExternalUrl(None)` action
/// (project without a live URL) is deliberately inert: it produces no
/// navigation effect, though activation still closes the launcher.
fn execution_effects(command: &Command) -> Vec<LauncherEffect> {
    match &command.action {
        CommandAction::ScrollToSection(section) => {
            vec![LauncherEffect::ScrollToSection(*section)]
        }
        CommandAction::OpenExternalUrl(Some(url)) => {
            vec![LauncherEffect::OpenExternalUrl(url.clone())]
        }
        CommandAction::OpenExternalUrl(None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use site_content::{Project, SocialLink};

    use super::*;
    use crate::registry::build_commands;

    fn commands() -> Vec<Command> {
        let sections = [SectionId::Home, SectionId::About];
        let projects = [
            Project {
                title: "Handbook",
                description: "Deployed project.",
                tags: &[],
                image_url: None,
                live_url: Some("https://handbook.example"),
                repo_url: None,
            },
            Project {
                title: "Anticheat",
                description: "Repo-only project.",
                tags: &[],
                image_url: None,
                live_url: None,
                repo_url: Some("https://github.com/example/anticheat"),
            },
        ];
        let socials = [SocialLink {
            name: "GitHub",
            url: "https://github.com/example",
            icon_id: "github",
        }];
        build_commands(&sections, &projects, &socials)
    }

    fn open(state: &mut LauncherState, commands: &[Command]) {
        let effects = reduce_launcher(state, commands, LauncherAction::Open);
        assert_eq!(effects, vec![LauncherEffect::FocusSearchInput]);
    }

    #[test]
    fn open_resets_query_and_selection_and_is_idempotent() {
        let commands = commands();
        let mut state = LauncherState::default();

        open(&mut state, &commands);
        assert_eq!(
            state,
            LauncherState {
                is_open: true,
                query: String::new(),
                active_index: 0,
            }
        );

        // Second open while already open leaves state unchanged and emits nothing.
        let before = state.clone();
        let effects = reduce_launcher(&mut state, &commands, LauncherAction::Open);
        assert_eq!(effects, vec![]);
        assert_eq!(state, before);
    }

    #[test]
    fn arrow_down_cycles_through_the_filtered_list() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);

        let n = commands.len();
        let mut seen = Vec::new();
        for _ in 0..(2 * n) {
            seen.push(state.active_index);
            reduce_launcher(&mut state, &commands, LauncherAction::SelectNext);
        }
        let expected: Vec<usize> = (0..n).chain(0..n).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn arrow_up_wraps_before_the_start() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);

        reduce_launcher(&mut state, &commands, LauncherAction::SelectPrevious);
        assert_eq!(state.active_index, commands.len() - 1);
        reduce_launcher(&mut state, &commands, LauncherAction::SelectPrevious);
        assert_eq!(state.active_index, commands.len() - 2);
    }

    #[test]
    fn query_change_resets_the_selection() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);

        reduce_launcher(&mut state, &commands, LauncherAction::SelectNext);
        reduce_launcher(&mut state, &commands, LauncherAction::SelectNext);
        assert_eq!(state.active_index, 2);

        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("go".into()));
        assert_eq!(state.active_index, 0);
        assert_eq!(state.query, "go");
    }

    #[test]
    fn selection_wraps_within_the_filtered_subsequence() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);
        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("go".into()));

        // "Go to Home", "Go to About" match.
        reduce_launcher(&mut state, &commands, LauncherAction::SelectNext);
        assert_eq!(state.active_index, 1);
        reduce_launcher(&mut state, &commands, LauncherAction::SelectNext);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn empty_filtered_list_disables_selection_and_activation() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);
        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("zzz".into()));

        let effects = reduce_launcher(&mut state, &commands, LauncherAction::SelectNext);
        assert_eq!(effects, vec![]);
        assert_eq!(state.active_index, 0);

        let effects = reduce_launcher(&mut state, &commands, LauncherAction::ActivateSelection);
        assert_eq!(effects, vec![]);
        assert!(state.is_open, "failed activation must not close the launcher");
    }

    #[test]
    fn activating_navigation_scrolls_and_closes_in_one_transition() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);
        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("about".into()));

        let effects = reduce_launcher(&mut state, &commands, LauncherAction::ActivateSelection);
        assert_eq!(effects, vec![LauncherEffect::ScrollToSection(SectionId::About)]);
        assert_eq!(state, LauncherState::default());
    }

    #[test]
    fn activating_a_live_project_opens_its_url() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);
        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("handbook".into()));

        let effects = reduce_launcher(&mut state, &commands, LauncherAction::ActivateSelection);
        assert_eq!(
            effects,
            vec![LauncherEffect::OpenExternalUrl("https://handbook.example".into())]
        );
        assert!(!state.is_open);
    }

    #[test]
    fn activating_an_inert_project_closes_without_navigation() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);
        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("anticheat".into()));

        let effects = reduce_launcher(&mut state, &commands, LauncherAction::ActivateSelection);
        assert_eq!(effects, vec![]);
        assert_eq!(state, LauncherState::default());
    }

    #[test]
    fn pointing_at_a_row_moves_the_selection_without_touching_the_query() {
        let commands = commands();
        let mut state = LauncherState::default();
        open(&mut state, &commands);
        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("go".into()));

        reduce_launcher(&mut state, &commands, LauncherAction::PointAt(1));
        assert_eq!(state.active_index, 1);
        assert_eq!(state.query, "go");

        // Out-of-range pointer positions are ignored.
        reduce_launcher(&mut state, &commands, LauncherAction::PointAt(9));
        assert_eq!(state.active_index, 1);
    }

    #[test]
    fn keyboard_actions_are_inert_while_closed() {
        let commands = commands();
        let mut state = LauncherState::default();

        for action in [
            LauncherAction::SetQuery("go".into()),
            LauncherAction::SelectNext,
            LauncherAction::SelectPrevious,
            LauncherAction::PointAt(1),
            LauncherAction::ActivateSelection,
            LauncherAction::ActivateAt(0),
        ] {
            let effects = reduce_launcher(&mut state, &commands, action);
            assert_eq!(effects, vec![]);
            assert_eq!(state, LauncherState::default());
        }
    }

    #[test]
    fn toggle_alternates_between_open_and_closed() {
        let commands = commands();
        let mut state = LauncherState::default();

        let effects = reduce_launcher(&mut state, &commands, LauncherAction::Toggle);
        assert_eq!(effects, vec![LauncherEffect::FocusSearchInput]);
        assert!(state.is_open);

        reduce_launcher(&mut state, &commands, LauncherAction::SetQuery("go".into()));
        reduce_launcher(&mut state, &commands, LauncherAction::Toggle);
        assert_eq!(state, LauncherState::default());
    }
}
