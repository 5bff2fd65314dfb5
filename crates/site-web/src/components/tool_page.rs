//! Tool page template

use leptos::prelude::*;
use site_core::{CallToAction, SiteConfig, ToolPageContent};

use super::{claim_page_head, IconGlyph};

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <li>
                    <span class="icon icon-check" aria-hidden="true"></span>
                    {*item}
                </li>
            }
        })
        .collect_view()
}

fn action_link(action: CallToAction, class: &'static str) -> AnyView {
    match action.target() {
        Some(href) => view! { <a href=href class=class>{action.label}</a> }.into_any(),
        None => view! {
            <button class=class disabled=true>{action.label}</button>
        }
        .into_any(),
    }
}

#[component]
pub fn ToolPageTemplate(content: &'static ToolPageContent) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    claim_page_head("tool", content.meta(&config));

    let integrations = content.integrations.map(|names| {
        let cards = names
            .iter()
            .map(|name| view! { <div class="integration-card">{*name}</div> })
            .collect_view();
        view! {
            <section class="tool-integrations">
                <h2>"Integrations"</h2>
                <div class="integration-grid">{cards}</div>
            </section>
        }
    });

    let article = content.article.map(|paragraphs| {
        let body = paragraphs
            .iter()
            .map(|p| view! { <p>{*p}</p> })
            .collect_view();
        view! { <article class="tool-article">{body}</article> }
    });

    let contact_sales = content
        .contact_sales()
        .map(|action| action_link(action, "btn btn-outline"));

    view! {
        <div class="tool-page">
            <a href="/" class="back-link">
                <span class="icon icon-arrow-left" aria-hidden="true"></span>
                "Back to Home"
            </a>

            <header class="tool-header">
                <div class="tool-icon">
                    <IconGlyph icon=content.icon />
                </div>
                <h1>{content.title}</h1>
                <Show when=move || content.is_coming_soon>
                    <span class="badge badge-coming">"Coming Soon"</span>
                </Show>
                <p class="tool-description">{content.description}</p>
            </header>

            <div class="tool-columns">
                <section class="tool-features">
                    <h2>"Features"</h2>
                    <ul>{bullet_list(content.features)}</ul>
                </section>
                <section class="tool-benefits">
                    <h2>"Benefits"</h2>
                    <ul>{bullet_list(content.benefits)}</ul>
                </section>
            </div>

            {integrations}

            <div class="tool-cta">
                {action_link(content.primary_action(), "btn btn-primary btn-lg")}
            </div>

            {article}

            {contact_sales}
        </div>
    }
}
