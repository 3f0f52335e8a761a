//! Command registry: builds the flat, ordered command list from the static
//! content sources and derives filtered views of it.

use site_content::{Project, SectionId, SocialLink};

use crate::model::{Command, CommandAction, CommandCategory, CommandId};

/// Builds the full command list from its three content sources.
///
/// Pure with respect to its inputs. Order is deterministic and is never
/// sorted afterwards: navigation commands in the given section order, then
/// projects in provider order, then social links in provider order.
///
/// A project without a live URL is still listed; its open action is inert.
pub fn build_commands(
    sections: &[SectionId],
    projects: &[Project],
    socials: &[SocialLink],
) -> Vec<Command> {
    let mut commands = Vec::with_capacity(sections.len() + projects.len() + socials.len());

    for section in sections {
        commands.push(Command {
            id: CommandId(format!("nav-{}", section.anchor())),
            display_name: format!("Go to {}", section.title()),
            category: CommandCategory::Navigation,
            action: CommandAction::ScrollToSection(*section),
            icon_id: "arrow-right",
        });
    }

    for project in projects {
        commands.push(Command {
            id: CommandId(format!("project-{}", project.title)),
            display_name: format!("View Project: {}", project.title),
            category: CommandCategory::Project,
            action: CommandAction::OpenExternalUrl(project.live_url.map(str::to_string)),
            icon_id: "rocket",
        });
    }

    for social in socials {
        commands.push(Command {
            id: CommandId(format!("social-{}", social.name)),
            display_name: format!("Open {}", social.name),
            category: CommandCategory::Social,
            action: CommandAction::OpenExternalUrl(Some(social.url.to_string())),
            icon_id: social.icon_id,
        });
    }

    commands
}

/// Case-insensitive substring filter over display names.
///
/// An empty query returns every command. Order is the subsequence of the
/// registry order; filtering never reorders.
pub fn filtered_commands<'a>(commands: &'a [Command], query: &str) -> Vec<&'a Command> {
    if query.is_empty() {
        return commands.iter().collect();
    }
    let needle = query.to_lowercase();
    commands
        .iter()
        .filter(|command| command.display_name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_commands() -> Vec<Command> {
        let sections = [SectionId::Home, SectionId::About];
        let projects = [Project {
            title: "Handbook",
            description: "An onboarding handbook.",
            tags: &["React"],
            image_url: None,
            live_url: Some("https://handbook.example"),
            repo_url: None,
        }];
        let socials = [SocialLink {
            name: "GitHub",
            url: "https://github.com/example",
            icon_id: "github",
        }];
        build_commands(&sections, &projects, &socials)
    }

    #[test]
    fn registry_orders_nav_then_projects_then_socials() {
        let commands = sample_commands();
        assert_eq!(commands.len(), 4);
        let categories: Vec<CommandCategory> = commands.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                CommandCategory::Navigation,
                CommandCategory::Navigation,
                CommandCategory::Project,
                CommandCategory::Social,
            ]
        );
        assert_eq!(commands[0].display_name, "Go to Home");
        assert_eq!(commands[1].display_name, "Go to About");
    }

    #[test]
    fn filtering_is_case_insensitive_and_preserves_order() {
        let commands = sample_commands();
        for query in ["go", "Go", "GO"] {
            let hits = filtered_commands(&commands, query);
            let names: Vec<&str> = hits.iter().map(|c| c.display_name.as_str()).collect();
            assert_eq!(names, vec!["Go to Home", "Go to About"], "query {query:?}");
        }
    }

    #[test]
    fn empty_query_returns_everything_and_misses_return_nothing() {
        let commands = sample_commands();
        assert_eq!(filtered_commands(&commands, "").len(), commands.len());
        assert_eq!(filtered_commands(&commands, "zzz").len(), 0);
    }

    #[test]
    fn projects_without_live_urls_are_listed_but_inert() {
        let projects = [Project {
            title: "WIP",
            description: "Not deployed yet.",
            tags: &[],
            image_url: None,
            live_url: None,
            repo_url: None,
        }];
        let commands = build_commands(&[], &projects, &[]);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].action, CommandAction::OpenExternalUrl(None));
    }
}
