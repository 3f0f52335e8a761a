use interaction_runtime::{CommandPalette, InteractionProvider};
use leptos::*;
use leptos_meta::*;
use site_content::SectionId;

use crate::{
    chrome::{GridBackground, Reveal, ScrollProgressBar, SpotlightCursor},
    config,
    sections::{About, Contact, Footer, Header, Hero, Projects, Skills},
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let host_services = site_host_web::host_services(&config::site_host_config());

    view! {
        <Title text="Aqqua — Fullstack & Game Script Developer" />
        <Meta
            name="description"
            content="Portfolio of Aqqua: responsive web applications and immersive game scripting."
        />

        <InteractionProvider host_services=host_services>
            <ScrollProgressBar />
            <div class="site-root">
                <GridBackground />
                <SpotlightCursor />
                <div class="site-layer">
                    <Header />
                    <main class="site-main">
                        <PageSections />
                    </main>
                    <Footer />
                </div>
                <CommandPalette />
            </div>
        </InteractionProvider>
    }
}

#[component]
fn PageSections() -> impl IntoView {
    // Shared by Skills (writes) and Projects (reads) to cross-filter cards.
    let active_skill = create_rw_signal(None::<String>);

    view! {
        <div class="site-sections">
            <section id=SectionId::Home.anchor()>
                <Hero />
            </section>
            <section id=SectionId::About.anchor()>
                <Reveal start=0.02>
                    <About />
                </Reveal>
            </section>
            <section id=SectionId::Skills.anchor()>
                <Reveal start=0.18>
                    <Skills active_skill=active_skill />
                </Reveal>
            </section>
            <section id=SectionId::Projects.anchor()>
                <Reveal start=0.4>
                    <Projects active_skill=active_skill />
                </Reveal>
            </section>
            <section id=SectionId::Contact.anchor()>
                <Reveal start=0.62>
                    <Contact />
                </Reveal>
            </section>
        </div>
    }
}
