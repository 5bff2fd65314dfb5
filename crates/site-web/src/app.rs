//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};
use site_core::{PageHead, SiteConfig};

use crate::browser;
use crate::components::ConsentBanner;
use crate::pages::{
    ContactsPage, CookiePolicyPage, HomePage, NotFoundPage, PrivacyPage, ToolPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("Invalid build configuration, using defaults: {}", e);
        SiteConfig::default()
    });
    provide_context(config);

    let head = RwSignal::new(PageHead::default());
    provide_context(head);
    Effect::new(move |_| head.with(browser::apply_head));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contacts") view=ContactsPage />
                    <Route path=path!("/privacy") view=PrivacyPage />
                    <Route path=path!("/cookie-policy") view=CookiePolicyPage />
                    <Route path=path!("/tools/:slug") view=ToolPage />
                </Routes>
            </main>
            <ConsentBanner />
        </Router>
    }
}
