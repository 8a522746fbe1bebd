mod about;
mod catalog_tabs;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod not_found;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::profile::{PersonSchema, DESCRIPTION, NAME, ROLE};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use not_found::NotFound;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let person = PersonSchema::new().to_json().unwrap_or_else(|e| {
        log::warn!("couldn't serialize person schema: {e}");
        String::new()
    });
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                />
                <script type="application/ld+json" inner_html=person></script>
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} | {title}") />
        <Meta name="description" content=DESCRIPTION />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=ROLE />
        <Hero />
        <main class="flex flex-col mx-auto w-full">
            <Projects />
            <About />
            <Skills />
            <Experience />
            <Education />
            <Contact />
        </main>
        <Footer />
    }
}

/// Heading block shared by every section.
#[component]
fn SectionHeader(
    title: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center max-w-3xl mx-auto mb-12">
            <h2 class="text-3xl font-bold mb-4">
                {icon.map(|icon| view! { <i class=format!("{icon} mr-2 text-accent")></i> })}
                {title}
            </h2>
            <p class="text-muted leading-relaxed">{blurb}</p>
        </div>
    }
}

#[component]
fn TechPills(technologies: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 rounded-full text-sm bg-primary/15 border border-primary/20 text-muted">
                            {*tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="grid gap-2 sm:grid-cols-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start gap-2 text-sm">
                            <i class="fas fa-check text-green-400 mt-1"></i>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn StatGrid(stats: &'static [crate::content::Stat]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="flex items-center gap-3 p-4 rounded-xl bg-white/5 border border-white/10">
                            <i class=format!("{} text-2xl text-accent", stat.icon)></i>
                            <div>
                                <h4 class="text-2xl font-bold">{stat.value}</h4>
                                <p class="text-xs text-muted">{stat.label}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
