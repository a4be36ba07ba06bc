use leptos::prelude::*;

use super::{reveal::Reveal, use_theme};
use crate::{
    content::{Skill, EDUCATION, SKILLS},
    section::Section,
};

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <section
            id=Section::Skills.anchor()
            class="relative z-10 py-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <Reveal class="mb-16">
                <span class=move || format!("text-sm {} font-medium", palette().accent)>
                    "MY EXPERTISE"
                </span>
                <h2 class="text-4xl md:text-5xl font-semibold mt-2">"Skills"</h2>
                <p class=move || format!("mt-4 max-w-2xl text-lg {}", palette().subtext)>
                    "Attitude is more important than the past, than education, than money, than circumstances, than what people do or say."
                </p>
            </Reveal>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-x-16 gap-y-8">
                {SKILLS.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </div>
            <Reveal class="mt-20">
                <h3 class="text-2xl font-semibold mb-6">"Education"</h3>
                <div class="space-y-8">
                    {EDUCATION
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class=move || format!("rounded-2xl p-6 {}", palette().card)>
                                    <h4 class="text-xl font-medium">{edu.degree}</h4>
                                    <p class=move || format!("{} mt-1", palette().subtext)>
                                        {edu.school}
                                    </p>
                                    <p class=move || format!("{} mt-2", palette().accent)>
                                        {edu.period}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let width = format!("{}%", skill.percentage);
    let percent = width.clone();

    view! {
        <Reveal>
            <div class="flex justify-between mb-2">
                <span class="font-medium text-lg">{skill.name}</span>
                <span class=move || palette().subtext>{percent}</span>
            </div>
            <div class=move || format!("h-2 w-full rounded-full overflow-hidden {}", palette().skill_track)>
                <div
                    class=move || format!("h-full rounded-full skill-fill {}", palette().skill_bar)
                    style:width=width
                ></div>
            </div>
        </Reveal>
    }
}
