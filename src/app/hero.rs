use leptos::prelude::*;

use super::use_theme;
use crate::section::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <section
            id=Section::Home.anchor()
            class="relative z-10 pt-32 md:pt-40 pb-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <div class="flex items-center flex-col gap-24 md:gap-32">
                <div class="space-y-6 fade-in-up">
                    <div class=move || {
                        format!(
                            "inline-block px-4 py-1 rounded-full {} backdrop-blur-sm text-sm font-medium mb-6",
                            palette().chip,
                        )
                    }>
                        <span class=move || palette().gradient_text>
                            "Full Stack Engineer & Cloud Enthusiast"
                        </span>
                    </div>
                    <h1 class="text-5xl md:text-8xl font-semibold tracking-tighter">
                        <span class="fade-in delay-200">
                            "HI"
                            <span class="inline-block ml-1 overflow-hidden">
                                <span class=move || {
                                    format!("inline-block blink {}", palette().accent)
                                }>"||||||||"</span>
                            </span>
                            " THERE"
                        </span>
                        <br />
                        <span class="fade-in delay-400">"I'M ATUL"</span>
                        <br />
                        <span class="relative block h-[1.2em]">
                            <span class=move || {
                                format!("{} absolute font-bold cycle-a", palette().gradient_text)
                            }>"SOFTWARE"</span>
                            <span class=move || {
                                format!("{} absolute font-bold cycle-b", palette().gradient_text)
                            }>"PYTHON"</span>
                        </span>
                        <span class="fade-in delay-800">"DEVELOPER"</span>
                    </h1>
                </div>
                <div class="flex flex-col md:flex-row items-start md:items-center justify-between space-y-12 md:space-y-0 md:space-x-32 fade-in-up delay-1000">
                    <div class="space-y-4">
                        <h2 class="text-2xl md:text-4xl font-medium tracking-tight font-display">
                            "DISCOVER THE" <br /> "PROFESSIONAL" <br /> "JOURNEY OF A"
                            <br />
                            <span class=move || palette().gradient_text>"DEVELOPER"</span>
                        </h2>
                        <a
                            href=Section::Projects.href()
                            class=move || {
                                format!(
                                    "inline-flex items-center space-x-2 {} rounded-full px-6 py-3 mt-4 transition-all",
                                    palette().button,
                                )
                            }
                        >
                            <span>"Explore Projects"</span>
                            <span>"→"</span>
                        </a>
                    </div>
                    <p class=move || format!("max-w-md text-lg leading-relaxed {}", palette().subtext)>
                        "A dedicated and skilled Python Programmer with specialization in Django framework, committed to staying current with new technologies & industry trends. Quick learning in adapting to Generative AI and new tech stacks, ensuring seamless integration of cutting-edge innovations into projects."
                    </p>
                </div>
                <a href=Section::About.href() class="animate-bounce text-2xl" aria-label="Scroll down">
                    "↓"
                </a>
            </div>
        </section>
    }
}
