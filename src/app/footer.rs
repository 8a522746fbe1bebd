use leptos::prelude::*;

use crate::content::profile::{
    copyright_year, EMAIL, FOOTER_LINKS, FOOTER_SERVICES, LOCATION, NAME, PHONE, ROLE,
    SOCIAL_LINKS,
};

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year();
    view! {
        <footer class="pt-16 pb-8 px-6 border-t border-white/10">
            <div class="max-w-7xl mx-auto">
                <div class="grid gap-10 md:grid-cols-2 lg:grid-cols-4 mb-12">
                    <div>
                        <h3 class="text-xl font-bold mb-2">
                            <i class="fas fa-code mr-2 text-accent"></i>
                            {NAME}
                        </h3>
                        <p class="text-accent text-sm mb-3">{ROLE}</p>
                        <p class="text-muted text-sm leading-relaxed">
                            "Transforming ideas into exceptional digital experiences with modern technologies and innovative solutions."
                        </p>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2 text-sm">
                            {FOOTER_LINKS
                                .iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <a
                                                href=section.href()
                                                class="text-muted hover:text-accent"
                                            >
                                                <i class=format!("{} mr-2", section.icon())></i>
                                                {section.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Services"</h4>
                        <ul class="space-y-2 text-sm text-muted">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|(name, icon)| {
                                    view! {
                                        <li>
                                            <i class=format!("{icon} mr-2")></i>
                                            {*name}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Contact Info"</h4>
                        <div class="space-y-2 text-sm text-muted">
                            <p>
                                <i class="fas fa-envelope mr-2"></i>
                                {EMAIL}
                            </p>
                            <p>
                                <i class="fas fa-map-marker-alt mr-2"></i>
                                {LOCATION}
                            </p>
                            <p>
                                <i class="fas fa-phone mr-2"></i>
                                {PHONE}
                            </p>
                        </div>
                    </div>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-10">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.name
                                    class="flex items-center gap-2 px-4 py-2 rounded-full bg-white/5 border border-white/10 hover:border-accent text-sm"
                                >
                                    <i class=social.icon></i>
                                    <span>{social.name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row justify-between gap-2 text-xs text-muted border-t border-white/10 pt-6">
                    <p>{format!("© {year} {NAME}. All rights reserved.")}</p>
                    <p>
                        <i class="fas fa-heart mr-1 text-red-400"></i>
                        "Made with passion and modern technologies"
                    </p>
                </div>
            </div>
        </footer>
    }
}
