use leptos::prelude::*;

use crate::content::{
    career::{Role, EXPERIENCE_STATS, ROLES},
    Section,
};

use super::{CheckList, SectionHeader, StatGrid, TechPills};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-24 px-6">
            <div class="max-w-5xl mx-auto">
                <SectionHeader
                    title="Professional Experience"
                    icon="fas fa-briefcase"
                    blurb="My journey through various roles and projects, showcasing my growth as a developer and my ability to deliver impactful solutions."
                />
                <div class="relative border-l border-white/10 pl-8 space-y-10 mb-16">
                    {ROLES.iter().map(|role| view! { <RoleCard role /> }).collect_view()}
                </div>
                <div class="p-8 rounded-2xl bg-white/5 border border-white/10">
                    <div class="flex items-center gap-4 mb-6">
                        <i class="fas fa-chart-line text-3xl text-accent"></i>
                        <div>
                            <h3 class="text-xl font-bold">"Experience Overview"</h3>
                            <p class="text-muted text-sm">
                                "Track record of delivering high-quality solutions across diverse domains and technologies."
                            </p>
                        </div>
                    </div>
                    <StatGrid stats={&EXPERIENCE_STATS[..]} />
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoleCard(role: &'static Role) -> impl IntoView {
    view! {
        <article class="relative p-8 rounded-2xl bg-white/5 border border-white/10">
            <span class="absolute -left-[41px] top-10 w-4 h-4 rounded-full bg-accent"></span>
            <div class="flex flex-wrap items-center gap-3 mb-2">
                <h3 class="text-xl font-bold">{role.title}</h3>
                {role
                    .current
                    .then(|| {
                        view! {
                            <span class="flex items-center gap-1 px-3 py-1 rounded-full text-xs bg-emerald-600/20 text-emerald-400">
                                <i class="fas fa-star"></i>
                                "Current"
                            </span>
                        }
                    })}
            </div>
            <div class="flex flex-wrap gap-4 text-sm text-muted mb-6">
                <span>
                    <i class="fas fa-building mr-1"></i>
                    {role.company}
                </span>
                <span>
                    <i class="fas fa-map-marker-alt mr-1"></i>
                    {role.location}
                </span>
                <span>
                    <i class="fas fa-calendar mr-1"></i>
                    {role.duration}
                </span>
                <span>
                    <i class="fas fa-clock mr-1"></i>
                    {role.employment}
                </span>
            </div>
            <h4 class="font-semibold text-accent mb-2">{role.project}</h4>
            <p class="text-muted leading-relaxed mb-6">{role.description}</p>
            <h5 class="font-semibold mb-3">"Achievements"</h5>
            <div class="mb-6">
                <CheckList items=role.achievements />
            </div>
            <h5 class="font-semibold mb-3">"Technologies"</h5>
            <TechPills technologies=role.technologies />
        </article>
    }
}
