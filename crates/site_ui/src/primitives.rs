use leptos::*;

#[component]
/// Centered section heading with an accented word and a short lede.
pub fn SectionHeader(
    title: &'static str,
    accent: &'static str,
    #[prop(optional)] lede: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-header-title">
                {title} " " <span class="section-header-accent">{accent}</span>
            </h2>
            {lede.map(|text| view! { <p class="section-header-lede">{text}</p> })}
        </header>
    }
}

#[component]
/// Small pill badge used for project tags and skill categories.
pub fn TagBadge(
    #[prop(into)] label: String,
    #[prop(optional, into)] highlighted: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <span class="tag-badge" class:highlighted=move || highlighted.get()>
            {label}
        </span>
    }
}
