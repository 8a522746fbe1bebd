use leptos::prelude::*;

use crate::{
    catalog::CatalogFilter,
    content::{
        projects::{Project, ProjectStatus, PROJECTS, SERVICES},
        Section,
    },
};

use super::{catalog_tabs::CatalogTabs, SectionHeader, TechPills};

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::new(&PROJECTS));

    view! {
        <section id=Section::Projects.id() class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Featured Projects"
                    blurb="Explore my latest work showcasing innovative solutions and modern technologies. Each project demonstrates my expertise in full-stack development and problem-solving."
                />
                <CatalogTabs filter all_label="All Projects" />
                <div class="grid gap-8 md:grid-cols-2 mb-16">
                    <For
                        each=move || filter.with(|f| f.visible_items().collect::<Vec<_>>())
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project /> }
                    />
                </div>
                <SectionHeader
                    title="Services I Offer"
                    blurb="Comprehensive solutions tailored to your business needs"
                />
                <div class="grid gap-8 md:grid-cols-3">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="p-8 rounded-2xl bg-white/5 border border-white/10 hover:-translate-y-1 transition-transform">
                                    <div class="w-14 h-14 rounded-full bg-white/5 flex items-center justify-center text-3xl mb-6">
                                        <span style=format!("color: {}", service.color)>
                                            {service.icon}
                                        </span>
                                    </div>
                                    <h3 class="text-xl font-bold mb-3">{service.title}</h3>
                                    <p class="text-muted leading-relaxed">{service.description}</p>
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
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let badge = match project.status {
        ProjectStatus::Live => "bg-emerald-600",
        ProjectStatus::Completed => "bg-blue-600",
    };
    view! {
        <article class="group relative overflow-hidden rounded-2xl bg-white/5 border border-white/10 hover:-translate-y-1 transition-transform">
            <div class="relative h-52 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform"
                />
                <div class="absolute inset-0 bg-black/70 flex flex-col justify-between p-4 opacity-0 group-hover:opacity-100 transition-opacity">
                    <span class=format!(
                        "self-end flex items-center gap-2 px-3 py-1 rounded-full text-xs font-semibold uppercase text-white {badge}",
                    )>
                        <i class=project.status.icon()></i>
                        {project.status.label()}
                    </span>
                    {project
                        .link
                        .map(|link| {
                            view! {
                                <a
                                    href=link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="self-center px-5 py-2 rounded-full bg-gradient-to-r from-primary to-accent text-white text-sm font-semibold"
                                >
                                    <i class="fas fa-external-link-alt mr-2"></i>
                                    "View Project"
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                <p class="text-muted leading-relaxed mb-6">{project.description}</p>
                <h5 class="font-semibold mb-3">"⚡ Technologies"</h5>
                <TechPills technologies=project.technologies />
            </div>
        </article>
    }
}
