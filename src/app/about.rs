use leptos::prelude::*;

use crate::content::{
    profile::{ABOUT_STATS, HIGHLIGHTS},
    Section,
};

use super::{CheckList, StatGrid};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 px-6">
            <div class="max-w-4xl mx-auto p-10 rounded-3xl bg-white/5 border border-white/10">
                <div class="flex items-center gap-4 mb-8">
                    <div class="w-16 h-16 rounded-full bg-gradient-to-r from-primary to-accent flex items-center justify-center text-2xl">
                        <i class="fas fa-user"></i>
                    </div>
                    <div>
                        <h2 class="text-3xl font-bold">"About Me"</h2>
                        <p class="text-muted">
                            "Passionate Full-Stack Developer creating innovative solutions"
                        </p>
                    </div>
                </div>
                <div class="space-y-4 mb-10 leading-relaxed">
                    <p class="p-4 rounded-xl bg-primary/10 border-l-4 border-primary">
                        "💡 I'm a passionate Full-Stack Developer with expertise in creating innovative solutions that make a real impact on users and businesses."
                    </p>
                    <p>
                        "🚀 My journey lies in creating innovative solutions that make a real impact on users and businesses. I specialize in building scalable applications using modern technologies and best practices."
                    </p>
                </div>
                <h4 class="text-lg font-semibold mb-4">"Achievements"</h4>
                <div class="mb-10">
                    <CheckList items={&HIGHLIGHTS[..]} />
                </div>
                <h4 class="text-lg font-semibold mb-4">"Experience Overview"</h4>
                <div class="mb-10">
                    <StatGrid stats={&ABOUT_STATS[..]} />
                </div>
                <div class="flex flex-wrap gap-4">
                    <a
                        href=Section::Contact.href()
                        class="px-6 py-3 rounded-full bg-gradient-to-r from-primary to-accent text-white font-semibold"
                    >
                        <i class="fas fa-envelope mr-2"></i>
                        "Get In Touch"
                    </a>
                    <a
                        href=Section::Projects.href()
                        class="px-6 py-3 rounded-full border border-white/20 hover:bg-white/5"
                    >
                        <i class="fas fa-briefcase mr-2"></i>
                        "View Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
