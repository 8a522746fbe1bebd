use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{
    profile::{RESUME_URL, ROLE, SHORT_NAME, TAGLINE},
    Section,
};

#[component]
pub fn Hero() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);

    let nav_links = move |class: &'static str| {
        Section::ALL
            .iter()
            .map(|section| {
                view! {
                    <li>
                        <a href=section.href() class=class on:click=close_menu>
                            {section.label()}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-background/80 backdrop-blur border-b border-white/10">
            <nav class="flex items-center justify-between max-w-7xl mx-auto px-6 py-4">
                <div class="text-2xl font-bold text-accent">{SHORT_NAME}</div>
                <ul class="hidden md:flex gap-6">
                    {nav_links("text-muted hover:text-foreground transition-colors")}
                </ul>
                <button
                    type="button"
                    class="md:hidden text-2xl"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class=move || {
                        if menu_open.get() { "fas fa-xmark" } else { "fas fa-bars" }
                    }></i>
                </button>
                <a
                    href=RESUME_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hidden md:inline-block px-5 py-2 rounded-full border border-accent text-accent hover:bg-accent/10"
                >
                    "Resume"
                </a>
            </nav>
            <div class=move || {
                if menu_open.get() {
                    "md:hidden fixed inset-0 top-16 bg-background/95 flex flex-col items-center justify-center gap-8"
                } else {
                    "hidden"
                }
            }>
                <ul class="flex flex-col items-center gap-6 text-xl">
                    {nav_links("hover:text-accent")}
                </ul>
                <a
                    href=RESUME_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-6 py-2 rounded-full border border-accent text-accent"
                    on:click=close_menu
                >
                    "Resume"
                </a>
            </div>
        </header>
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center text-center px-6 bg-gradient-to-b from-black/60 to-background"
        >
            <div class="max-w-3xl">
                <span class="uppercase tracking-widest text-accent text-sm">{ROLE}</span>
                <h1 class="text-4xl md:text-6xl font-bold my-6">
                    "Building Software to solve "
                    <span class="text-primary">"real‑world problems"</span>
                </h1>
                <p class="text-lg text-muted mb-8">{TAGLINE}</p>
                <a
                    href=Section::Projects.href()
                    class="inline-block px-8 py-3 rounded-full bg-gradient-to-r from-primary to-accent text-white font-semibold"
                >
                    "View My Work"
                </a>
            </div>
        </section>
    }
}
