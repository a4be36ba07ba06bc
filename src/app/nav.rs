use leptos::prelude::*;

use super::use_theme;
use crate::{
    content::{EMAIL, OWNER, SOCIALS},
    section::Section,
};

#[component]
pub fn Nav() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        Section::ALL
            .iter()
            .map(|section| {
                view! {
                    <a
                        href=section.href()
                        on:click=move |_| set_menu_open(false)
                        class=move || format!("{} {class}", palette().nav_link)
                    >
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 {} z-50 px-4 md:px-12 py-6 flex justify-between items-center transition-colors duration-300",
                palette().nav,
            )
        }>
            <div class="hidden md:flex space-x-8">
                {links("text-md transition-colors cursor-pointer font-medium")}
            </div>
            <div class="flex items-center">
                <span class=move || format!("text-2xl font-bold {}", palette().gradient_text)>
                    {OWNER}
                </span>
            </div>
            <div class="flex items-center space-x-6">
                <button
                    on:click=move |_| theme.update(|t| *t = t.toggle())
                    class=move || {
                        format!("p-2 rounded-full cursor-pointer {} transition-all", palette().toggle)
                    }
                    aria-label=move || theme.get().toggle_label()
                >
                    {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                </button>
                <div class="hidden md:flex items-center space-x-2">
                    <i class=move || format!("extra-email {}", palette().accent) />
                    <span class=move || {
                        format!("text-md {} font-medium", palette().gradient_text)
                    }>{EMAIL}</span>
                </div>
                <button
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    class="md:hidden cursor-pointer text-2xl"
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <div class=move || {
                format!(
                    "md:hidden fixed top-20 left-0 right-0 {} backdrop-blur-md z-50 p-6 border-b {}",
                    palette().mobile_menu,
                    palette().border,
                )
            }>
                <div class="flex flex-col space-y-6">
                    {links("text-left cursor-pointer font-medium text-lg")}
                    <div class="flex items-center space-x-2 pt-4 border-t border-gray-800">
                        <i class=move || format!("extra-email {}", palette().accent) />
                        <span class=move || {
                            format!("text-sm {} font-medium", palette().gradient_text)
                        }>{EMAIL}</span>
                    </div>
                    <div class="flex space-x-4 pt-2">
                        {SOCIALS
                            .iter()
                            .filter(|s| s.name != "Facebook")
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.name
                                        class=move || {
                                            format!("{} cursor-pointer transition-colors", palette().social_link)
                                        }
                                    >
                                        <i class=s.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
