use leptos::prelude::*;

use crate::catalog::{CatalogFilter, Categorized, CategoryTag, Selection};

const TAB_BASE: &str =
    "flex items-center gap-2 px-5 py-2 rounded-full text-sm font-medium border transition-all duration-300";
const TAB_ACTIVE: &str = "bg-gradient-to-r from-primary to-accent text-white border-transparent";
const TAB_IDLE: &str = "bg-white/5 border-white/10 text-muted hover:text-foreground";

/// "All" plus one tab per category, driving a shared [`CatalogFilter`].
#[component]
pub fn CatalogTabs<T>(
    filter: RwSignal<CatalogFilter<T>>,
    all_label: &'static str,
    /// Show how many items each tab would display.
    #[prop(optional)]
    counts: bool,
) -> impl IntoView
where
    T: Categorized + Send + Sync + 'static,
{
    let tab = move |selection: Selection<T::Category>, label: &'static str, icon: &'static str| {
        let tag = selection.tag();
        let count = counts.then(|| filter.with_untracked(|f| f.count(selection)));
        view! {
            <button
                type="button"
                role="tab"
                aria-selected=move || filter.with(|f| f.selected() == selection).to_string()
                class=move || {
                    let state = if filter.with(|f| f.selected() == selection) {
                        TAB_ACTIVE
                    } else {
                        TAB_IDLE
                    };
                    format!("{TAB_BASE} {state}")
                }
                on:click=move |_| filter.update(|f| f.set_category(tag))
            >
                <i class=icon></i>
                {label}
                {count.map(|n| view! { <span class="text-xs opacity-70">{n}</span> })}
            </button>
        }
    };

    let categories = <T::Category as CategoryTag>::VARIANTS;
    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-12" role="tablist">
            {tab(Selection::All, all_label, "fas fa-th-large")}
            {categories
                .iter()
                .map(|category| tab(Selection::Only(*category), category.label(), category.icon()))
                .collect_view()}
        </div>
    }
}
