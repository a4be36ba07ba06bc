use leptos::prelude::*;

use super::{reveal::Reveal, use_theme};
use crate::{content::SERVICES, section::Section};

#[component]
pub fn Services() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <section
            id=Section::Services.anchor()
            class="relative z-10 py-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <Reveal class="mb-16">
                <span class=move || format!("text-sm {} font-medium", palette().accent)>
                    "WHAT I OFFER"
                </span>
                <h2 class="text-4xl md:text-5xl font-semibold mt-2">"Services"</h2>
                <p class=move || format!("mt-4 max-w-2xl text-lg {}", palette().subtext)>
                    "Bringing ideas to life with full-stack development and scalable solutions tailored to your needs."
                </p>
            </Reveal>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <Reveal>
                                <div class=move || {
                                    format!(
                                        "relative h-full rounded-2xl p-8 transition-transform hover:-translate-y-1 {}",
                                        palette().card,
                                    )
                                }>
                                    <div class=move || {
                                        format!(
                                            "w-12 h-12 rounded-xl flex items-center justify-center mb-6 {}",
                                            palette().icon_badge,
                                        )
                                    }>
                                        <i class=service.icon.class() />
                                    </div>
                                    <h3 class="text-xl font-semibold mb-3">{service.title}</h3>
                                    <p class=move || palette().subtext>{service.description}</p>
                                    <span class=move || {
                                        format!(
                                            "absolute top-6 right-8 text-4xl font-bold opacity-20 {}",
                                            palette().gradient_text,
                                        )
                                    }>{service.number}</span>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
