use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::{reveal::Reveal, use_site_state, use_theme};
#[cfg(feature = "ssr")]
use crate::contact::ContactForm;
use crate::{
    contact::{Field, SubmissionState},
    content::{EMAIL, LOCATION, PHONE, SOCIALS},
    section::Section,
};

#[server]
pub async fn relay_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::relay;

    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    let form = relay::screen(form).map_err(|errors| -> ServerFnError {
        tracing::warn!(?errors, "refusing to relay invalid contact form");
        ServerFnError::new("Invalid contact form")
    })?;
    let relay = relay::global().map_err(|e| -> ServerFnError { ServerFnError::new(e) })?;
    relay.forward(&form).await.map_err(|e| {
        tracing::warn!(error = %e, "contact relay failed");
        ServerFnError::new(e)
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    view! {
        <section
            id=Section::Contact.anchor()
            class="relative z-10 py-24 px-4 md:px-12 max-w-7xl mx-auto"
        >
            <Reveal class="mb-16">
                <span class=move || format!("text-sm {} font-medium", palette().accent)>
                    "GET IN TOUCH"
                </span>
                <h2 class="text-4xl md:text-5xl font-semibold mt-2">"Contact"</h2>
                <p class=move || format!("mt-4 max-w-2xl text-lg {}", palette().subtext)>
                    "Have a project in mind? Feel free to reach out and let's create something amazing together."
                </p>
            </Reveal>
            <div class="grid grid-cols-1 lg:grid-cols-5 gap-12">
                <Reveal class="lg:col-span-2">
                    <ContactInfo />
                </Reveal>
                <Reveal class="lg:col-span-3 delay-200">
                    <div class=move || format!("rounded-2xl p-8 {}", palette().card)>
                        <ContactFormView />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();

    let item = move |icon: &'static str, label: &'static str, value: &'static str| {
        view! {
            <div class="flex items-start space-x-4">
                <div class=move || {
                    format!("p-3 rounded-full flex items-center justify-center {}", palette().icon_badge)
                }>
                    <i class=icon />
                </div>
                <div>
                    <p class="font-medium">{label}</p>
                    <p class=move || format!("text-md {}", palette().subtext)>{value}</p>
                </div>
            </div>
        }
    };

    view! {
        <div class="space-y-8">
            <h3 class="text-2xl font-semibold">"Contact Information"</h3>
            {item("extra-email", "Email", EMAIL)}
            {item("extra-phone", "Phone", PHONE)}
            {item("extra-location", "Location", LOCATION)}
            <div class="flex space-x-4 pt-4">
                {SOCIALS
                    .iter()
                    .map(|s| {
                        view! {
                            <a
                                href=s.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=s.name
                                class=move || {
                                    format!("text-xl {} transition-colors", palette().social_link)
                                }
                            >
                                <i class=s.icon />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let site = use_site_state();
    // memoized so keystrokes don't rebuild the form and steal focus
    let submitted = Memo::new(move |_| site.form.with(|f| f.state() == SubmissionState::Submitted));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let res = site.submit();
        log::debug!("contact submit: {res:?}");
    };

    move || {
        if submitted.get() {
            Either::Left(view! {
                <div class="text-center py-12">
                    <div class=move || {
                        format!(
                            "w-16 h-16 mx-auto rounded-full flex items-center justify-center text-3xl {} mb-6",
                            palette().success_badge,
                        )
                    }>"✓"</div>
                    <h4 class="text-xl font-medium mb-2">"Message Sent Successfully!"</h4>
                    <p class=move || palette().subtext>
                        "Thank you for reaching out. I'll get back to you soon."
                    </p>
                </div>
            })
        } else {
            Either::Right(view! {
                <form on:submit=on_submit class="space-y-6" novalidate=true>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <FormInput field=Field::Name label="Your Name" placeholder="John Doe" />
                        <FormInput
                            field=Field::Email
                            label="Your Email"
                            placeholder="john@example.com"
                            input_type="email"
                        />
                    </div>
                    <FormInput field=Field::Subject label="Subject" placeholder="Project Inquiry" />
                    <FormInput
                        field=Field::Message
                        label="Your Message"
                        placeholder="Hello, I'd like to discuss a project..."
                        multiline=true
                    />
                    <button
                        type="submit"
                        class=move || {
                            format!(
                                "w-full flex items-center justify-center space-x-2 rounded-xl px-6 py-4 font-medium text-white cursor-pointer {}",
                                palette().skill_bar,
                            )
                        }
                    >
                        <span>"Send Message"</span>
                        <span>"➤"</span>
                    </button>
                </form>
            })
        }
    }
}

#[component]
fn FormInput(
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let theme = use_theme();
    let palette = move || theme.get().palette();
    let site = use_site_state();

    let value = move || site.form.with(|f| f.value(field).to_string());
    let error = move || site.form.with(|f| f.error(field).to_string());
    let input_class = move || {
        format!(
            "w-full px-4 py-3 rounded-xl focus:outline-none transition-colors {}",
            palette().input,
        )
    };
    let on_input = move |ev: leptos::ev::Event| site.update_field(field, event_target_value(&ev));
    let id = format!("contact_{field}");

    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=id.clone()
                name=field.as_str()
                rows="5"
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=id.clone()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        })
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">
                {label}
            </label>
            {control}
            {move || {
                let error = error();
                (!error.is_empty()).then(|| view! { <p class="mt-1 text-sm text-red-500">{error}</p> })
            }}
        </div>
    }
}
