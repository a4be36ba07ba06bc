use leptos::prelude::*;

use super::use_theme;
use crate::{
    content::{OWNER, SOCIALS},
    section::Section,
};

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <footer class=move || format!("relative z-10 border-t {} py-16 px-4 md:px-12", palette().border)>
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-12">
                <div>
                    <span class=move || format!("text-2xl font-bold {}", palette().gradient_text)>
                        {OWNER}
                    </span>
                    <p class=move || format!("mt-4 {}", palette().subtext)>
                        "Thank you for visiting my personal portfolio website. Connect with me over socials."
                    </p>
                </div>
                <div>
                    <h4 class="font-semibold mb-4">"Navigation"</h4>
                    <ul class="space-y-2">
                        {Section::ALL
                            .iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a href=section.href() class=move || palette().nav_link>
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="font-semibold mb-4">"Social"</h4>
                    <ul class="space-y-2">
                        {SOCIALS
                            .iter()
                            .map(|s| {
                                view! {
                                    <li>
                                        <a
                                            href=s.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=move || palette().nav_link
                                        >
                                            {s.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class=move || {
                format!(
                    "max-w-7xl mx-auto mt-12 pt-8 border-t {} flex flex-col md:flex-row justify-between text-sm {}",
                    palette().border,
                    palette().subtext,
                )
            }>
                <span>{format!("© {} All Rights Reserved", env!("BUILD_YEAR"))}</span>
                <span>
                    "Designed and Developed 💛 by "
                    <span class=move || palette().gradient_text>{OWNER}</span>
                </span>
            </div>
        </footer>
    }
}
