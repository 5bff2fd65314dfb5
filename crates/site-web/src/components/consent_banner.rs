//! Cookie consent banner

use leptos::prelude::*;
use site_core::consent::{ConsentCategory, ConsentDialog, DialogView, PolicyLink};

use crate::browser::consent_store;

#[component]
pub fn ConsentBanner() -> impl IntoView {
    let dialog = RwSignal::new(ConsentDialog::mount(&consent_store()));

    // The router performs the navigation; the handler only leaves the hint.
    let policy_link = move |link: PolicyLink| {
        view! {
            <a
                href=link.path()
                class="policy-link"
                on:click=move |_| {
                    dialog.with_untracked(|d| {
                        d.follow_policy_link(&consent_store(), link);
                    });
                }
            >
                {link.label()}
            </a>
        }
    };

    let summary = move || {
        view! {
            <p class="consent-text">
                "We use cookies to enhance your browsing experience and analyze our traffic."
            </p>
            <div class="consent-actions">
                <button
                    class="btn btn-primary btn-sm btn-block"
                    on:click=move |_| dialog.update(|d| d.accept_all(&consent_store()))
                >
                    <span class="icon icon-check" aria-hidden="true"></span>
                    "Accept All"
                </button>
                <button
                    class="btn btn-secondary btn-sm btn-block"
                    on:click=move |_| dialog.update(ConsentDialog::customize)
                >
                    "Customize"
                </button>
                <button
                    class="btn btn-outline btn-sm btn-block"
                    on:click=move |_| dialog.update(|d| d.reject_all(&consent_store()))
                >
                    "Reject All"
                </button>
                <div class="consent-links">
                    {policy_link(PolicyLink::Privacy)}
                    " • "
                    {policy_link(PolicyLink::CookiePolicy)}
                </div>
            </div>
        }
    };

    let details = move || {
        let rows = ConsentCategory::ALL
            .into_iter()
            .map(|category| {
                let granted = move || dialog.with(|d| d.settings().get(category).is_granted());
                view! {
                    <div class="consent-row">
                        <button
                            class=move || if granted() { "switch switch-on" } else { "switch" }
                            role="switch"
                            aria-checked=move || granted().to_string()
                            on:click=move |_| dialog.update(|d| d.toggle(category))
                        >
                            <span class="switch-knob"></span>
                        </button>
                        <span class="consent-label">{category.label()}</span>
                    </div>
                }
            })
            .collect_view();

        view! {
            <div class="consent-rows">{rows}</div>
            <button
                class="btn btn-primary btn-sm btn-block"
                on:click=move |_| dialog.update(|d| d.save(&consent_store()))
            >
                "Save Preferences"
            </button>
        }
    };

    view! {
        <Show when=move || dialog.with(ConsentDialog::is_visible)>
            <div class="consent-banner" role="dialog" aria-label="Privacy Settings">
                <div class="consent-card">
                    <div class="consent-header">
                        <span class="icon icon-shield" aria-hidden="true"></span>
                        <h2>"Privacy Settings"</h2>
                        <Show when=move || dialog.with(|d| d.view() == DialogView::Detail)>
                            <button
                                class="consent-close"
                                aria-label="Close details"
                                on:click=move |_| dialog.update(ConsentDialog::close_details)
                            >
                                <span class="icon icon-x" aria-hidden="true"></span>
                            </button>
                        </Show>
                    </div>
                    <div class="consent-body">
                        <Show
                            when=move || dialog.with(|d| d.view() == DialogView::Detail)
                            fallback=summary
                        >
                            {details}
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
