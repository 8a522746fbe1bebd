use leptos::prelude::*;

use crate::content::{
    career::{Credential, StudyStatus, CREDENTIALS, LEARNING_STATS},
    Section,
};

use super::{CheckList, SectionHeader, StatGrid};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="py-24 px-6 bg-white/[0.02]">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Education & Certifications"
                    icon="fas fa-graduation-cap"
                    blurb="My academic journey and professional certifications that have shaped my expertise in software development and cloud technologies."
                />
                <div class="grid gap-8 lg:grid-cols-3 mb-16">
                    {CREDENTIALS
                        .iter()
                        .map(|credential| view! { <CredentialCard credential /> })
                        .collect_view()}
                </div>
                <div class="p-8 rounded-2xl bg-white/5 border border-white/10">
                    <div class="flex items-center gap-4 mb-6">
                        <i class="fas fa-graduation-cap text-3xl text-accent"></i>
                        <div>
                            <h3 class="text-xl font-bold">"Learning Journey"</h3>
                            <p class="text-muted text-sm">
                                "Continuous learning and skill development through formal education and professional certifications."
                            </p>
                        </div>
                    </div>
                    <StatGrid stats={&LEARNING_STATS[..]} />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CredentialCard(credential: &'static Credential) -> impl IntoView {
    let badge = match credential.status {
        StudyStatus::Ongoing => "bg-amber-600/20 text-amber-400",
        StudyStatus::Completed => "bg-emerald-600/20 text-emerald-400",
    };
    view! {
        <article class="flex flex-col p-8 rounded-2xl bg-white/5 border border-white/10">
            <div class="flex gap-4 mb-4">
                <div class="w-12 h-12 shrink-0 rounded-xl bg-primary/20 flex items-center justify-center">
                    <i class=format!("{} text-xl", credential.icon)></i>
                </div>
                <div>
                    <h3 class="text-lg font-bold mb-2">{credential.title}</h3>
                    <div class="flex flex-wrap gap-3 text-xs text-muted">
                        <span>
                            <i class="fas fa-building mr-1"></i>
                            {credential.institution}
                        </span>
                        <span>
                            <i class="fas fa-calendar mr-1"></i>
                            {credential.date}
                        </span>
                        <span class=format!("px-2 py-0.5 rounded-full {badge}")>
                            <i class=format!("{} mr-1", credential.status.icon())></i>
                            {credential.status.label()}
                        </span>
                    </div>
                </div>
            </div>
            <p class="text-muted leading-relaxed mb-6">{credential.description}</p>
            <h5 class="font-semibold mb-3">"Achievements"</h5>
            <div class="flex-grow mb-6">
                <CheckList items=credential.achievements />
            </div>
            <span class="text-sm text-accent">
                <i class="fas fa-gem mr-1"></i>
                {credential.kind.label()}
            </span>
        </article>
    }
}
