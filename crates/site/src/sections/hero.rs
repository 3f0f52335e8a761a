use leptos::*;
use site_ui::{Icon, IconName, IconSize};

const NAME: &str = "Aqqua";

#[component]
pub(crate) fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero-name" aria-label=NAME>
                {NAME
                    .chars()
                    .map(|ch| view! { <span class="hero-letter">{ch.to_string()}</span> })
                    .collect_view()}
            </h1>
            <h2 class="hero-role">"Fullstack & Game Script Developer"</h2>
            <p class="hero-blurb">
                "I build beautiful, responsive web applications and immersive game experiences \
                 with a focus on cutting-edge technologies."
            </p>
            <div class="hero-socials">
                {site_content::socials()
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                class="hero-social-link"
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=format!("Visit my {} profile", social.name)
                            >
                                {IconName::from_id(social.icon_id)
                                    .map(|name| view! { <Icon name=name size=IconSize::Lg /> })}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
