//! Runtime provider and context wiring for the interaction engine.
//!
//! This module owns the long-lived launcher reducer container, the effect
//! queue, the shared scroll telemetry hub, and the single window-level
//! keyboard listener. UI composition stays in [`crate::components`].

use leptos::*;
use site_host::HostServices;

use crate::{
    effect_executor,
    model::{Command, LauncherState},
    reducer::{reduce_launcher, LauncherAction, LauncherEffect},
    registry::build_commands,
    shortcuts::{action_for_chord, KeyChord},
    telemetry::provide_scroll_telemetry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading launcher state and dispatching
/// [`LauncherAction`] values.
pub struct InteractionRuntimeContext {
    /// Host service bundle for executing launcher side effects.
    pub host: StoredValue<HostServices>,
    /// Reactive launcher state signal.
    pub launcher: RwSignal<LauncherState>,
    /// Current registry snapshot. Rebuilt, never mutated in place.
    pub commands: StoredValue<Vec<Command>>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<LauncherEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LauncherAction>,
}

impl InteractionRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: LauncherAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`InteractionRuntimeContext`] and the scroll telemetry hub to
/// descendant components, and attaches the global shortcut listener.
pub fn InteractionProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services);
    let launcher = create_rw_signal(LauncherState::default());
    let commands = store_value(build_commands(
        &site_content::SECTION_ORDER,
        site_content::projects(),
        site_content::socials(),
    ));
    let effects = create_rw_signal(Vec::<LauncherEffect>::new());

    let dispatch = Callback::new(move |action: LauncherAction| {
        let mut state = launcher.get_untracked();
        let previous = state.clone();
        let new_effects = commands.with_value(|commands| reduce_launcher(&mut state, commands, action));
        if state != previous {
            launcher.set(state);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = InteractionRuntimeContext {
        host,
        launcher,
        commands,
        effects,
        dispatch,
    };

    provide_context(runtime);
    provide_scroll_telemetry();
    effect_executor::install(runtime);

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let chord = KeyChord::from_event(&ev);
        let state = launcher.get_untracked();
        if let Some(decision) = action_for_chord(&chord, &state) {
            if decision.suppress_default {
                ev.prevent_default();
            }
            dispatch.call(decision.action);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    children().into_view()
}

/// Returns the current [`InteractionRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`InteractionProvider`].
pub fn use_interaction_runtime() -> InteractionRuntimeContext {
    use_context::<InteractionRuntimeContext>().expect("InteractionRuntimeContext not provided")
}
