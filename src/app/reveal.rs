use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (shown, set_shown) = signal(false);

    // latch so the animation only plays once
    Effect::new(move |_| {
        if visible.get() {
            set_shown(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                let state = if shown.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" };
                format!("transition-all duration-700 ease-out {state} {class}")
            }
        >
            {children()}
        </div>
    }
}
