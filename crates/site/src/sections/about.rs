use leptos::*;
use site_ui::SectionHeader;

#[component]
pub(crate) fn About() -> impl IntoView {
    view! {
        <div class="about">
            <SectionHeader title="About" accent="Me" />
            <div class="about-body">
                <p>
                    "I'm a developer who lives in two worlds: the web, where I ship fullstack \
                     applications end to end, and game platforms, where I script systems that \
                     have to hold up under thousands of concurrent players."
                </p>
                <p>
                    "Lately that means React and Next.js on the front, Node and C# behind it, \
                     and Lua where the game engine demands it. I care about interfaces that \
                     feel fast and code that stays readable six months later."
                </p>
            </div>
        </div>
    }
}
