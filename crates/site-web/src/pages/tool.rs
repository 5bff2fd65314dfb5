//! Tool Page

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use site_core::content;

use super::NotFoundPage;
use crate::components::ToolPageTemplate;

/// `/tools/:slug`, falling back to not-found for unknown slugs
#[component]
pub fn ToolPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params
            .with(|p| p.get("slug").map(|s| s.to_string()))
            .unwrap_or_default();
        match content::find(&slug) {
            Some(page) => view! { <ToolPageTemplate content=page /> }.into_any(),
            None => {
                log::debug!("Unknown tool slug: {}", slug);
                view! { <NotFoundPage /> }.into_any()
            }
        }
    }
}
