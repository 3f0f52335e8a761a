//! Static content for the portfolio site: the section map, project list,
//! skill list, and social links.
//!
//! Everything here is compile-time data. Consumers (the command registry, the
//! page sections) treat these lists as read-only inputs; order is meaningful
//! and is preserved everywhere downstream.

/// Page sections in their fixed top-to-bottom order.
pub const SECTION_ORDER: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifier for a named page section anchor.
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// DOM anchor id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Human-readable section title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A portfolio project entry.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Optional screenshot/preview image.
    pub image_url: Option<&'static str>,
    /// Deployed instance, when one exists. Projects without a live URL stay
    /// listed in the launcher but their open action is inert.
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A skill badge shown in the skills grid.
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub icon_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An external social profile link.
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon_id: &'static str,
}

const PROJECTS: [Project; 2] = [
    Project {
        title: "MC&D Onboarding Handbook",
        description: "A digital, interactive onboarding handbook for the fictional organization \
                      Marshall, Carter & Dark Ltd. (MC&D), built with a modern tech stack.",
        tags: &["Next.js", "React", "TailwindCSS", "Vercel"],
        image_url: Some("https://i.ibb.co/fz245Kjz/image.png"),
        live_url: Some("https://mcd-onboarding-handbook.vercel.app"),
        repo_url: Some("https://github.com/Dev-NotAqua/mcd-onboarding-handbook"),
    },
    Project {
        title: "FiveM Anticheat (WIP)",
        description: "A robust, work-in-progress anticheat solution for the FiveM platform, using \
                      advanced techniques to detect and prevent cheating in game.",
        tags: &["Lua", "Backend", "Systems"],
        image_url: None,
        live_url: None,
        repo_url: Some("https://github.com/Dev-NotAqua/FivemAC"),
    },
];

const SKILLS: [Skill; 10] = [
    Skill { name: "JavaScript", category: "Frontend", icon_id: "javascript" },
    Skill { name: "TypeScript", category: "Frontend", icon_id: "typescript" },
    Skill { name: "React", category: "Frontend", icon_id: "react" },
    Skill { name: "Next.js", category: "Fullstack", icon_id: "nextjs" },
    Skill { name: "Node.js", category: "Backend", icon_id: "nodejs" },
    Skill { name: "TailwindCSS", category: "Styling", icon_id: "tailwind" },
    Skill { name: "C#", category: "Backend", icon_id: "csharp" },
    Skill { name: "C++", category: "Systems", icon_id: "cpp" },
    Skill { name: "Python", category: "Backend", icon_id: "python" },
    Skill { name: "Lua", category: "Scripting", icon_id: "lua" },
];

const SOCIALS: [SocialLink; 1] = [SocialLink {
    name: "GitHub",
    url: "https://github.com/Dev-NotAqua",
    icon_id: "github",
}];

/// Projects in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Skills in display order.
pub fn skills() -> &'static [Skill] {
    &SKILLS
}

/// Social links in display order.
pub fn socials() -> &'static [SocialLink] {
    &SOCIALS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn section_order_is_stable_and_anchors_are_unique() {
        let anchors: Vec<&str> = SECTION_ORDER.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "about", "skills", "projects", "contact"]);

        let mut deduped = anchors.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), anchors.len());
    }

    #[test]
    fn exactly_one_project_is_missing_a_live_url() {
        let inert: Vec<&Project> = projects().iter().filter(|p| p.live_url.is_none()).collect();
        assert_eq!(inert.len(), 1);
        assert_eq!(inert[0].title, "FiveM Anticheat (WIP)");
    }
}
