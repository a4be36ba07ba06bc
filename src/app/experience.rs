use leptos::prelude::*;

use super::{reveal::Reveal, use_theme};
use crate::{content::EXPERIENCES, section::Section};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <section
            id=Section::Experience.anchor()
            class="relative z-10 py-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <Reveal class="mb-16">
                <span class=move || format!("text-sm {} font-medium", palette().accent)>
                    "WORK HISTORY"
                </span>
                <h2 class="text-4xl md:text-5xl font-semibold mt-2">"Experience"</h2>
                <p class=move || format!("mt-4 max-w-2xl text-lg {}", palette().subtext)>
                    "Aspiring Software Engineer with hands-on experience in Python, Django, React.js, and Cloud Solutions."
                </p>
            </Reveal>
            <div class=move || format!("relative border-l pl-8 space-y-16 {}", palette().border)>
                {EXPERIENCES
                    .iter()
                    .map(|exp| {
                        view! {
                            <Reveal class="relative">
                                <span class=move || {
                                    format!(
                                        "absolute -left-[41px] top-2 w-4 h-4 rounded-full {}",
                                        palette().skill_bar,
                                    )
                                }></span>
                                <div class="flex flex-col md:flex-row md:justify-between md:items-baseline mb-4">
                                    <div>
                                        <h3 class="text-2xl font-semibold">{exp.title}</h3>
                                        <p class=move || format!("text-lg {}", palette().accent)>
                                            {exp.company}
                                        </p>
                                    </div>
                                    <span class=move || format!("text-sm {}", palette().subtext)>
                                        {exp.duration}
                                    </span>
                                </div>
                                <ul class=move || format!("space-y-3 {}", palette().subtext)>
                                    {exp
                                        .responsibilities
                                        .iter()
                                        .map(|resp| view! { <li>"• " {*resp}</li> })
                                        .collect_view()}
                                </ul>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
