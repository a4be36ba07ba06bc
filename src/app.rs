mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod reveal;
mod services;
mod skills;
mod state;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::OWNER, theme::Theme};
use about::About;
use contact::Contact;
use experience::ExperienceSection;
use footer::Footer;
use hero::Hero;
use nav::Nav;
use projects::Projects;
use services::Services;
use skills::Skills;
use toast::{ScrollTop, Toast};

pub use contact::relay_contact;
pub use state::{provide_site_state, use_site_state, SiteState};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    provide_site_state();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="color-scheme" content=move || if theme.get().is_dark() { "dark" } else { "light" } />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <Title text="Portfolio" />
        <main class=move || {
            format!(
                "font-sans {} min-h-screen overflow-x-hidden relative transition-colors duration-300",
                palette().main,
            )
        }>
            <div class=move || palette().backdrop>
                <div class=move || palette().backdrop_glow></div>
                <div class=move || palette().backdrop_image></div>
                <div class=move || palette().backdrop_fade></div>
            </div>
            <Nav />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <ExperienceSection />
            <Services />
            <Contact />
            <Footer />
            <ScrollTop />
            <Toast />
        </main>
    }
}
