//! Not Found Page

use leptos::prelude::*;
use site_core::Icon;

use crate::components::IconGlyph;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-icon">
                <IconGlyph icon=Icon::AlertTriangle />
            </div>
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you are looking for doesn't exist or has been moved."</p>
            <a href="/" class="btn btn-primary">
                <IconGlyph icon=Icon::Home />
                "Back to Home"
            </a>
        </div>
    }
}
