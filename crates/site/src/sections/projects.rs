use leptos::*;
use site_content::Project;
use site_ui::{SectionHeader, TagBadge};

/// Whether a project stays in the foreground for the current skill filter.
pub(crate) fn project_matches(project: &Project, active_skill: Option<&str>) -> bool {
    match active_skill {
        None => true,
        Some(skill) => project.tags.iter().any(|tag| *tag == skill),
    }
}

#[component]
pub(crate) fn Projects(
    /// Selected skill name driving the cross-filter; `None` shows everything.
    active_skill: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="projects">
            <SectionHeader title="Featured" accent="Projects" />
            <div class="projects-grid">
                {site_content::projects()
                    .iter()
                    .map(|project| view! { <ProjectCard project=project active_skill=active_skill /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    active_skill: RwSignal<Option<String>>,
) -> impl IntoView {
    let dimmed = move || !project_matches(project, active_skill.get().as_deref());

    view! {
        <article class="project-card" class:dimmed=dimmed>
            {project
                .image_url
                .map(|url| view! { <img class="project-card-image" src=url alt=project.title /> })}
            <h3 class="project-card-title">{project.title}</h3>
            <p class="project-card-description">{project.description}</p>
            <ul class="project-card-tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        let highlighted =
                            move || active_skill.get().as_deref() == Some(*tag);
                        view! {
                            <li>
                                <TagBadge label=*tag highlighted=Signal::derive(highlighted) />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="project-card-links">
                {project.live_url.map(|url| {
                    view! {
                        <a class="project-card-link" href=url target="_blank" rel="noopener noreferrer">
                            "Live"
                        </a>
                    }
                })}
                {project.repo_url.map(|url| {
                    view! {
                        <a class="project-card-link" href=url target="_blank" rel="noopener noreferrer">
                            "Repository"
                        </a>
                    }
                })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_matches_every_project() {
        for project in site_content::projects() {
            assert!(project_matches(project, None));
        }
    }

    #[test]
    fn filter_matches_by_exact_tag() {
        let project = &site_content::projects()[0];
        assert!(project_matches(project, Some("React")));
        assert!(!project_matches(project, Some("Lua")));
    }
}
