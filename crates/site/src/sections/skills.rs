use leptos::*;
use site_ui::{Icon, IconName, IconSize, SectionHeader, TagBadge};

#[component]
pub(crate) fn Skills(
    /// Selected skill name, shared with the projects grid for cross-filtering.
    active_skill: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="skills">
            <SectionHeader
                title="My"
                accent="Skills"
                lede="Click a skill to highlight the projects that use it."
            />
            <ul class="skills-grid">
                {site_content::skills()
                    .iter()
                    .map(|skill| {
                        let name = skill.name.to_string();
                        let selected = {
                            let name = name.clone();
                            move || active_skill.get().as_deref() == Some(name.as_str())
                        };
                        let on_click = {
                            let name = name.clone();
                            move |_| {
                                active_skill.update(|current| {
                                    *current = match current.as_deref() {
                                        Some(selected) if selected == name => None,
                                        _ => Some(name.clone()),
                                    };
                                });
                            }
                        };
                        view! {
                            <li class="skills-cell">
                                <button
                                    class="skills-card"
                                    class:selected=selected.clone()
                                    aria-pressed={
                                        let selected = selected.clone();
                                        move || selected().to_string()
                                    }
                                    on:click=on_click
                                >
                                    {IconName::from_id(skill.icon_id)
                                        .map(|icon| view! { <Icon name=icon size=IconSize::Md /> })}
                                    <span class="skills-card-name">{skill.name}</span>
                                    <TagBadge label=skill.category />
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
