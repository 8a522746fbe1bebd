use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactForm, Field, SubmitStatus, CONFIRMATION_MS, SUBMIT_DELAY_MS},
    content::{
        profile::{CONTACT_METHODS, SOCIAL_LINKS},
        Section,
    },
};

use super::SectionHeader;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10 focus:outline-none focus:ring-2 focus:ring-accent";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Get In Touch"
                    icon="fas fa-envelope"
                    blurb="Ready to start a project or have a question? I'd love to hear from you. Let's discuss how we can work together to bring your ideas to life."
                />
                <div class="grid gap-8 lg:grid-cols-2 mb-16">
                    <ContactDetails />
                    <MessageForm />
                </div>
                <ResponseTimes />
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="p-8 rounded-2xl bg-white/5 border border-white/10">
            <h3 class="text-xl font-bold mb-2">"Get In Touch"</h3>
            <p class="text-muted mb-8">
                "Let's discuss your next project and bring your ideas to life"
            </p>
            <div class="space-y-6 mb-10">
                {CONTACT_METHODS
                    .iter()
                    .map(|method| {
                        view! {
                            <div class="flex items-center gap-4">
                                <div class="w-12 h-12 rounded-xl bg-primary/20 flex items-center justify-center">
                                    <i class=method.icon></i>
                                </div>
                                <div>
                                    <h4 class="font-semibold">{method.label}</h4>
                                    {match method.href {
                                        Some(href) => {
                                            view! {
                                                <a href=href class="text-muted hover:text-accent">
                                                    {method.value}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! { <span class="text-muted">{method.value}</span> }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <h4 class="font-semibold mb-4">"Connect With Me"</h4>
            <div class="flex flex-wrap gap-3">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 px-4 py-2 rounded-full bg-white/5 border border-white/10 hover:border-accent"
                            >
                                <i class=social.icon></i>
                                <span>{social.name}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The message form. Nothing is actually sent: a timer stands in for the
/// request and another one hides the confirmation afterwards.
#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let (error, set_error) = signal(None::<String>);

    let UseTimeoutFnReturn {
        start: start_confirmation,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(|f| f.acknowledge()),
        CONFIRMATION_MS,
    );
    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |_: ()| {
            let mut sent = false;
            form.update(|f| sent = f.complete());
            if sent {
                log::info!("contact message marked as sent");
                start_confirmation(());
            }
        },
        SUBMIT_DELAY_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut res = Ok(());
        form.update(|f| res = f.begin_submit());
        match res {
            Ok(()) => {
                set_error.set(None);
                start_send(());
            }
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let status = move || form.with(|f| f.status());

    view! {
        <div class="p-8 rounded-2xl bg-white/5 border border-white/10">
            <h3 class="text-xl font-bold mb-6">"Send Message"</h3>
            <form class="space-y-5" on:submit=on_submit novalidate=true>
                {Field::ALL.into_iter().map(|field| view! { <FormField form field /> }).collect_view()}
                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <p class="text-sm text-red-400" role="alert">
                                    {e}
                                </p>
                            }
                        })
                }}
                {move || {
                    (status() == SubmitStatus::Sent)
                        .then(|| {
                            view! {
                                <p class="text-sm text-emerald-400" role="status">
                                    <i class="fas fa-check-circle mr-2"></i>
                                    "Thanks! Your message has been sent."
                                </p>
                            }
                        })
                }}
                <button
                    type="submit"
                    class="w-full flex items-center justify-center gap-2 px-6 py-3 rounded-xl bg-gradient-to-r from-primary to-accent text-white font-semibold disabled:opacity-60"
                    disabled=move || status() == SubmitStatus::Submitting
                >
                    <i class=move || {
                        if status() == SubmitStatus::Submitting {
                            "fas fa-spinner fa-spin"
                        } else {
                            "fas fa-paper-plane"
                        }
                    }></i>
                    {move || {
                        if status() == SubmitStatus::Submitting {
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let input = if field.is_multiline() {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                required=true
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.id()
                name=field.id()
                type=field.input_type()
                required=true
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };
    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            {input}
        </div>
    }
}

#[component]
fn ResponseTimes() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-3 items-center p-8 rounded-2xl bg-white/5 border border-white/10">
            <div>
                <i class="fas fa-clock text-3xl text-accent mb-3"></i>
                <h3 class="text-xl font-bold">"Quick Response"</h3>
                <p class="text-muted text-sm">
                    "I typically respond within 24 hours during business days."
                </p>
            </div>
            <div class="flex items-center gap-4">
                <i class="fas fa-calendar-check text-2xl text-accent"></i>
                <div>
                    <h4 class="font-semibold">"Business Hours"</h4>
                    <p class="text-muted text-sm">"Mon - Fri: 9 AM - 6 PM IST"</p>
                </div>
            </div>
            <div class="flex items-center gap-4">
                <i class="fas fa-reply text-2xl text-accent"></i>
                <div>
                    <h4 class="font-semibold">"Response Time"</h4>
                    <p class="text-muted text-sm">"Within 24 hours"</p>
                </div>
            </div>
        </div>
    }
}
