use leptos::{either::Either, prelude::*};

use super::{reveal::Reveal, use_theme};
use crate::{
    content::{Project, PROJECTS},
    section::Section,
};

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <section
            id=Section::Projects.anchor()
            class="relative z-10 py-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <Reveal class="mb-16">
                <span class=move || format!("text-sm {} font-medium", palette().accent)>
                    "MY PORTFOLIO"
                </span>
                <h2 class="text-4xl md:text-5xl font-semibold mt-2">"Featured Projects"</h2>
                <p class=move || format!("mt-4 max-w-2xl text-lg {}", palette().subtext)>
                    "A curated selection of my best development projects that showcase my skills and expertise."
                </p>
            </Reveal>
            <div class="space-y-12">
                {PROJECTS
                    .iter()
                    .filter(|p| p.featured)
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    let title = match project.link {
        Some(link) => Either::Left(view! {
            <a
                href=link
                target="_blank"
                rel="noopener noreferrer"
                class="hover:underline"
            >
                {project.title}
            </a>
        }),
        None => Either::Right(project.title),
    };

    view! {
        <Reveal>
            <div class=move || format!("rounded-2xl p-8 {}", palette().card)>
                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-6">
                    <div>
                        <h3 class="text-2xl md:text-3xl font-semibold">{title}</h3>
                        <div class=move || format!("mt-2 text-sm {}", palette().subtext)>
                            <span>{project.category}</span>
                            " • "
                            <span>{project.duration}</span>
                        </div>
                    </div>
                    {project
                        .link
                        .map(|link| {
                            view! {
                                <a
                                    href=link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=move || {
                                        format!(
                                            "inline-flex items-center space-x-2 {} rounded-full px-4 py-2 text-sm",
                                            palette().button,
                                        )
                                    }
                                >
                                    <span>"View Project"</span>
                                    <span>"↗"</span>
                                </a>
                            }
                        })}
                </div>
                <ul class=move || format!("space-y-3 {}", palette().subtext)>
                    {project
                        .description
                        .iter()
                        .map(|desc| view! { <li>"• " {*desc}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mt-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=move || {
                                    format!("px-3 py-1 rounded-full text-xs {}", palette().chip)
                                }>{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
