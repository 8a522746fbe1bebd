use leptos::prelude::*;

use crate::{
    catalog::{CatalogFilter, CategoryTag},
    content::{
        skills::{Skill, SkillCategory, SKILLS},
        Section,
    },
};

use super::{catalog_tabs::CatalogTabs, SectionHeader};

#[component]
pub fn Skills() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::new(&SKILLS));

    view! {
        <section id=Section::Skills.id() class="py-24 px-6 bg-white/[0.02]">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Technical Skills"
                    icon="fas fa-cogs"
                    blurb="A comprehensive overview of my technical expertise and proficiency levels across various technologies and frameworks."
                />
                <CatalogTabs filter all_label="All Skills" counts=true />
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3 mb-20">
                    <For
                        each=move || filter.with(|f| f.visible_items().collect::<Vec<_>>())
                        key=|skill| skill.name
                        children=|skill| view! { <SkillCard skill /> }
                    />
                </div>
                <div class="text-center mb-10">
                    <h3 class="text-2xl font-bold mb-2">"Skill Categories"</h3>
                    <p class="text-muted">"Comprehensive expertise across multiple technology domains"</p>
                </div>
                <div class="grid gap-6 md:grid-cols-3">
                    {SkillCategory::VARIANTS
                        .iter()
                        .map(|category| {
                            let summary = category.summary();
                            view! {
                                <div class="p-6 rounded-2xl bg-white/5 border border-white/10 text-center">
                                    <i class=format!(
                                        "{} text-3xl text-accent mb-4",
                                        category.summary_icon(),
                                    )></i>
                                    <h4 class="text-lg font-bold mb-2">{category.label()}</h4>
                                    <p class="text-sm text-muted mb-4">{category.description()}</p>
                                    <div class="flex justify-center gap-4 text-xs">
                                        <span>{format!("{} Technologies", summary.technologies)}</span>
                                        <span>
                                            {format!("{}% Avg Proficiency", summary.average_level)}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-white/5 border border-white/10">
            <div class="flex items-center gap-4 mb-4">
                <div class="w-12 h-12 rounded-xl bg-primary/20 flex items-center justify-center">
                    <i class=format!("{} text-2xl", skill.icon)></i>
                </div>
                <div>
                    <h4 class="font-bold">{skill.name}</h4>
                    <div class="flex gap-3 text-xs text-muted">
                        <span class="text-accent font-semibold">{format!("{}%", skill.level)}</span>
                        <span>{skill.category.label()}</span>
                    </div>
                </div>
            </div>
            <div
                class="h-2 rounded-full bg-white/10 overflow-hidden"
                role="progressbar"
                aria-valuenow=skill.level.to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div
                    class="h-full bg-gradient-to-r from-primary to-accent"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
            <div class="flex justify-between text-xs text-muted mt-1">
                <span>"Beginner"</span>
                <span>"Expert"</span>
            </div>
        </div>
    }
}
