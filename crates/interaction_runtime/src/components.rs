//! Command palette UI for the launcher state machine.

use leptos::*;
use site_ui::{Icon, IconName, IconSize};

use crate::{
    reducer::LauncherAction, registry::filtered_commands, runtime_context::use_interaction_runtime,
};

/// DOM id of the palette search input, targeted by the focus effect.
pub const SEARCH_INPUT_ID: &str = "command-palette-search";

#[component]
/// Modal command palette. Renders nothing while the launcher is closed; all
/// state transitions go through the reducer via the runtime context.
pub fn CommandPalette() -> impl IntoView {
    let runtime = use_interaction_runtime();
    let launcher = runtime.launcher;

    let filtered = create_memo(move |_| {
        let state = launcher.get();
        if !state.is_open {
            return Vec::new();
        }
        runtime.commands.with_value(|commands| {
            filtered_commands(commands, &state.query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let active_index = create_memo(move |_| launcher.get().active_index);

    view! {
        <Show when=move || launcher.get().is_open fallback=|| ()>
            <div
                class="command-palette-backdrop"
                on:mousedown=move |_| runtime.dispatch_action(LauncherAction::Close)
            >
                <div
                    class="command-palette-panel"
                    role="dialog"
                    aria-label="Command palette"
                    on:mousedown=move |ev| ev.stop_propagation()
                >
                    <div class="command-palette-search-row">
                        <input
                            id=SEARCH_INPUT_ID
                            class="command-palette-search"
                            type="text"
                            placeholder="Search commands..."
                            prop:value=move || launcher.get().query
                            on:input=move |ev| {
                                runtime.dispatch_action(LauncherAction::SetQuery(event_target_value(&ev)))
                            }
                        />
                    </div>
                    <div class="command-palette-results">
                        <Show
                            when=move || !filtered.get().is_empty()
                            fallback=|| view! { <p class="command-palette-empty">"No results found."</p> }
                        >
                            <ul class="command-palette-list" role="listbox">
                                {move || {
                                    filtered
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, command)| {
                                            let icon = IconName::from_id(command.icon_id);
                                            let label = command.display_name.clone();
                                            view! {
                                                <li
                                                    class="command-palette-row"
                                                    class:active=move || active_index.get() == index
                                                    role="option"
                                                    aria-selected=move || (active_index.get() == index).to_string()
                                                    on:mousemove=move |_| {
                                                        runtime.dispatch_action(LauncherAction::PointAt(index))
                                                    }
                                                    on:click=move |_| {
                                                        runtime.dispatch_action(LauncherAction::ActivateAt(index))
                                                    }
                                                >
                                                    <span class="command-palette-row-label">
                                                        {icon.map(|name| view! { <Icon name=name size=IconSize::Sm /> })}
                                                        <span>{label}</span>
                                                    </span>
                                                    <span class="command-palette-row-category">
                                                        {command.category.label()}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
