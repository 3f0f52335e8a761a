//! Inline SVG icon set keyed by stable string ids.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to the site. Content crates reference these through their
/// string ids so they stay independent of the UI layer.
pub enum IconName {
    ArrowRight,
    Rocket,
    GitHub,
    Sparkles,
    JavaScript,
    TypeScript,
    React,
    NextJs,
    NodeJs,
    Tailwind,
    CSharp,
    Cpp,
    Python,
    Lua,
}

enum Glyph {
    /// Stroke path in a 24x24 viewBox.
    Stroke(&'static str),
    /// Short text badge (language/brand marks).
    Badge(&'static str),
}

impl IconName {
    /// Resolves an icon from its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "arrow-right" => Self::ArrowRight,
            "rocket" => Self::Rocket,
            "github" => Self::GitHub,
            "sparkles" => Self::Sparkles,
            "javascript" => Self::JavaScript,
            "typescript" => Self::TypeScript,
            "react" => Self::React,
            "nextjs" => Self::NextJs,
            "nodejs" => Self::NodeJs,
            "tailwind" => Self::Tailwind,
            "csharp" => Self::CSharp,
            "cpp" => Self::Cpp,
            "python" => Self::Python,
            "lua" => Self::Lua,
            _ => return None,
        })
    }

    /// Stable id of this icon.
    pub fn id(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Rocket => "rocket",
            Self::GitHub => "github",
            Self::Sparkles => "sparkles",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::React => "react",
            Self::NextJs => "nextjs",
            Self::NodeJs => "nodejs",
            Self::Tailwind => "tailwind",
            Self::CSharp => "csharp",
            Self::Cpp => "cpp",
            Self::Python => "python",
            Self::Lua => "lua",
        }
    }

    fn glyph(self) -> Glyph {
        match self {
            Self::ArrowRight => Glyph::Stroke("M5 12h14M13 6l6 6-6 6"),
            Self::Rocket => Glyph::Stroke(
                "M12 2c3 2 5 6 5 10l-2 3h-6l-2-3c0-4 2-8 5-10zM9 15l-3 5m9-5l3 5m-6-5v7",
            ),
            Self::GitHub => Glyph::Stroke(
                "M12 2a10 10 0 0 0-3 19.5c.5.1.7-.2.7-.5v-2c-2.8.6-3.4-1.2-3.4-1.2-.4-1.1-1-1.4-1-1.4-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.5 2.3 1.1 2.9.8.1-.6.3-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5 0-1.1.4-2 1-2.7-.1-.3-.4-1.3.1-2.7 0 0 .8-.3 2.7 1a9.4 9.4 0 0 1 5 0c1.9-1.3 2.7-1 2.7-1 .5 1.4.2 2.4.1 2.7.6.7 1 1.6 1 2.7 0 3.9-2.4 4.7-4.6 5 .3.3.6.9.6 1.8v2.7c0 .3.2.6.7.5A10 10 0 0 0 12 2z",
            ),
            Self::Sparkles => Glyph::Stroke(
                "M12 3l1.5 4.5L18 9l-4.5 1.5L12 15l-1.5-4.5L6 9l4.5-1.5L12 3zM19 14l.8 2.2L22 17l-2.2.8L19 20l-.8-2.2L16 17l2.2-.8L19 14z",
            ),
            Self::JavaScript => Glyph::Badge("JS"),
            Self::TypeScript => Glyph::Badge("TS"),
            Self::React => Glyph::Badge("Re"),
            Self::NextJs => Glyph::Badge("N"),
            Self::NodeJs => Glyph::Badge("No"),
            Self::Tailwind => Glyph::Badge("Tw"),
            Self::CSharp => Glyph::Badge("C#"),
            Self::Cpp => Glyph::Badge("C++"),
            Self::Python => Glyph::Badge("Py"),
            Self::Lua => Glyph::Badge("Lua"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IconSize {
    fn px(self) -> &'static str {
        match self {
            Self::Sm => "16",
            Self::Md => "20",
            Self::Lg => "28",
        }
    }
}

#[component]
/// Renders a named icon at the given size, inheriting `currentColor`.
pub fn Icon(name: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let px = size.px();
    match name.glyph() {
        Glyph::Stroke(path) => view! {
            <svg
                class="ui-icon"
                data-icon=name.id()
                width=px
                height=px
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="1.6"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d=path />
            </svg>
        }
        .into_view(),
        Glyph::Badge(text) => view! {
            <svg
                class="ui-icon"
                data-icon=name.id()
                width=px
                height=px
                viewBox="0 0 24 24"
                fill="currentColor"
                aria-hidden="true"
            >
                <text x="12" y="16" text-anchor="middle" font-size="9" font-weight="700">
                    {text}
                </text>
            </svg>
        }
        .into_view(),
    }
}
