use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{use_site_state, use_theme};
use crate::{contact::NotificationKind, section::scroll_top_visible};

#[component]
pub fn Toast() -> impl IntoView {
    let theme = use_theme();
    let site = use_site_state();
    let toast = move || {
        site.toasts
            .with(|t| t.current().map(|n| (n.message.clone(), n.kind)))
    };

    move || {
        toast().map(|(message, kind)| {
            let palette = theme.get().palette();
            let (bg, icon) = match kind {
                NotificationKind::Success => (palette.toast_success, "✓"),
                NotificationKind::Info => (palette.toast_info, "•"),
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-6 left-1/2 transform -translate-x-1/2 z-50 {bg} text-white px-6 py-3 rounded-xl shadow-lg flex items-center space-x-4 fade-in-up",
                    )
                >
                    <div>{icon}</div>
                    <div>{message}</div>
                    <button
                        class="cursor-pointer"
                        aria-label="Dismiss notification"
                        on:click=move |_| site.dismiss()
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

#[component]
pub fn ScrollTop() -> impl IntoView {
    let theme = use_theme();
    let (_, y) = use_window_scroll();
    let visible = Memo::new(move |_| scroll_top_visible(y.get()));

    view! {
        <button
            aria-label="Scroll to top"
            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            class=move || {
                let state = if visible.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-12 pointer-events-none"
                };
                format!(
                    "fixed bottom-6 right-6 z-40 p-3 rounded-full cursor-pointer transition-all duration-300 {} {state}",
                    theme.get().palette().button,
                )
            }
        >
            "↑"
        </button>
    }
}
