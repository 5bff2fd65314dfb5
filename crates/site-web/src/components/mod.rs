//! UI Components

mod consent_banner;
mod contact_form;
mod head;
mod tool_page;

pub use consent_banner::ConsentBanner;
pub use contact_form::ContactForm;
pub use head::claim_page_head;
pub use tool_page::ToolPageTemplate;

use leptos::prelude::*;
use site_core::Icon;

/// Named icon, drawn by the stylesheet
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <span class=icon.css_class() aria-hidden="true"></span> }
}
