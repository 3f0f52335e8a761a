use interaction_runtime::{use_interaction_runtime, LauncherAction};
use leptos::*;
use site_content::SECTION_ORDER;

#[component]
pub(crate) fn Header() -> impl IntoView {
    let runtime = use_interaction_runtime();

    view! {
        <header class="site-header">
            <a class="site-header-brand" href="#home">
                "Aqqua"
            </a>
            <nav class="site-header-nav" aria-label="Sections">
                {SECTION_ORDER
                    .iter()
                    .skip(1)
                    .map(|section| {
                        view! {
                            <a class="site-header-link" href=format!("#{}", section.anchor())>
                                {section.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="site-header-search"
                aria-label="Open command palette"
                aria-keyshortcuts="Meta+K Control+K"
                on:click=move |_| runtime.dispatch_action(LauncherAction::Open)
            >
                <span>"Search"</span>
                <kbd class="site-header-kbd">"⌘K"</kbd>
            </button>
        </header>
    }
}
