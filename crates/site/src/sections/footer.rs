use leptos::*;
use site_ui::{Icon, IconName, IconSize};

#[component]
pub(crate) fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-socials">
                {site_content::socials()
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                class="site-footer-link"
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.name
                            >
                                {IconName::from_id(social.icon_id)
                                    .map(|name| view! { <Icon name=name size=IconSize::Sm /> })}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="site-footer-note">"Designed & built by Aqqua."</p>
        </footer>
    }
}
