use leptos::prelude::*;
use leptos_meta::Title;

/// Fallback for unknown routes. During SSR the response status is set to 404.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 text-center px-6">
            <h1 class="text-6xl font-bold text-accent">"404"</h1>
            <p class="text-muted">"This page doesn't exist."</p>
            <a href="/" class="px-6 py-3 rounded-full bg-gradient-to-r from-primary to-accent text-white">
                "Back to home"
            </a>
        </div>
    }
}
