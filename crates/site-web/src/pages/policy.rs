//! Privacy and Cookie Policy Pages

use leptos::prelude::*;
use site_core::{ConsentCategory, PageMeta, SiteConfig};

use crate::browser::consent_store;
use crate::components::claim_page_head;

/// Shown when the visitor arrived here from the open consent banner
#[component]
fn BannerNotice() -> impl IntoView {
    let from_banner = consent_store().take_dialog_hint();

    view! {
        <Show when=move || from_banner>
            <p class="notice">
                "You opened this page from the privacy settings banner. "
                "It stays open at the bottom of the page until you make a choice."
            </p>
        </Show>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    claim_page_head(
        "privacy",
        PageMeta::new(
            &config,
            "Privacy Policy",
            "How we collect, use and protect your personal data.",
        ),
    );

    view! {
        <div class="policy">
            <h1>"Privacy Policy"</h1>
            <BannerNotice />
            <h2>"What we collect"</h2>
            <p>
                "When you use the contact form we receive your name, company, email, "
                "phone number, message and the services you are interested in."
            </p>
            <h2>"Why we collect it"</h2>
            <p>
                "We use this information only to answer your request. You give your "
                "consent by ticking the consent box before sending the form."
            </p>
            <h2>"Your rights"</h2>
            <p>
                "You may request access to, correction of, or deletion of your data at any time "
                "through the contact page."
            </p>
        </div>
    }
}

#[component]
pub fn CookiePolicyPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    claim_page_head(
        "cookie-policy",
        PageMeta::new(
            &config,
            "Cookie Policy",
            "Which cookies and storage entries we use and how to change your choice.",
        ),
    );

    let categories = ConsentCategory::ALL
        .into_iter()
        .map(|category| view! { <li>{category.label()}</li> })
        .collect_view();

    view! {
        <div class="policy">
            <h1>"Cookie Policy"</h1>
            <BannerNotice />
            <p>
                "We store your privacy choice in your browser's local storage so the banner "
                "is not shown again. The choice covers these categories:"
            </p>
            <ul>{categories}</ul>
            <p>"Clearing your browser storage resets the choice and shows the banner again."</p>
        </div>
    }
}
