//! Contacts Page

use leptos::prelude::*;
use site_core::{PageMeta, SiteConfig};

use crate::components::{claim_page_head, ContactForm};

#[component]
pub fn ContactsPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    claim_page_head(
        "contacts",
        PageMeta::new(
            &config,
            "Contact Us",
            "Tell us which AI solution you need and we will get back to you.",
        ),
    );

    view! {
        <div class="contacts">
            <header class="page-header">
                <h1>"Contact Us"</h1>
                <p>"Tell us about your project and we'll get back to you within one business day."</p>
            </header>
            <ContactForm />
        </div>
    }
}
