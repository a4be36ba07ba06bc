use leptos::prelude::*;

use super::{reveal::Reveal, use_site_state, use_theme};
use crate::{
    contact::NotificationKind,
    content::{HOBBIES, RESUME_PENDING},
    section::Section,
};

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let site = use_site_state();

    view! {
        <section
            id=Section::About.anchor()
            class="relative z-10 py-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                <Reveal>
                    <span class=move || format!("text-sm {} font-medium", palette().accent)>
                        "ABOUT ME"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-semibold mt-2 mb-8">
                        "Passionate about creating meaningful digital experiences"
                    </h2>
                    <p class=move || format!("text-lg mb-6 leading-relaxed {}", palette().subtext)>
                        "I am a self-taught python programmer with a deep passion for creating innovative and engaging web projects. I am committed to staying up-to-date with the latest trends and best practices in the industry. I've gained a wealth of knowledge and skills through my personal projects."
                    </p>
                    <blockquote class=move || {
                        format!("italic border-l-4 pl-4 mb-8 {} {}", palette().border, palette().subtext)
                    }>
                        "Any fool can write code that a computer can understand. Good programmers write code that humans can understand. Sometimes it pays to stay in bed on Monday, rather than spending the rest of the week debugging Monday's code."
                    </blockquote>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href=Section::Contact.href()
                            class=move || {
                                format!(
                                    "inline-flex items-center space-x-2 {} rounded-full px-5 py-2 text-md transition-all hover:scale-105",
                                    palette().button,
                                )
                            }
                        >
                            <span>"Contact Me"</span>
                            <span>"→"</span>
                        </a>
                        <a
                            href="https://drive.google.com/your-resume-link"
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=move |ev| {
                                ev.prevent_default();
                                site.notify(RESUME_PENDING, NotificationKind::Info);
                            }
                            class=move || {
                                format!(
                                    "inline-flex items-center space-x-2 {} rounded-full px-5 py-2 text-md transition-all hover:scale-105",
                                    palette().pill,
                                )
                            }
                        >
                            <span>"Download Resume"</span>
                            <span>"↗"</span>
                        </a>
                    </div>
                </Reveal>
                <Reveal class="delay-200">
                    <div class=move || format!("rounded-2xl p-8 {}", palette().card)>
                        <h3 class="text-2xl font-semibold mb-6">"Hobbies & Interests"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            {HOBBIES
                                .iter()
                                .map(|hobby| {
                                    view! {
                                        <div class=move || {
                                            format!(
                                                "px-4 py-3 rounded-lg {} flex items-center space-x-2",
                                                palette().chip,
                                            )
                                        }>
                                            <span>{*hobby}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
