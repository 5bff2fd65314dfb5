//! Home Page

use leptos::prelude::*;
use site_core::catalog::hot_tools;
use site_core::{PageMeta, SiteConfig, ToolEntry, TOOL_GROUPS};

use crate::components::{claim_page_head, IconGlyph};

fn tool_card(entry: &'static ToolEntry) -> impl IntoView {
    view! {
        <a href=entry.to class="tool-card" class:tool-coming=entry.coming>
            <IconGlyph icon=entry.icon />
            <span class="tool-name">{entry.name}</span>
            <Show when=move || entry.hot>
                <span class="badge badge-hot">"Hot"</span>
            </Show>
            <Show when=move || entry.coming>
                <span class="badge badge-coming">"Soon"</span>
            </Show>
        </a>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    claim_page_head(
        "home",
        PageMeta::new(
            &config,
            "AI Solutions for Business",
            "Chat bots, voice bots, avatars and assistants that plug into the tools your team already uses.",
        ),
    );

    let groups = TOOL_GROUPS
        .iter()
        .map(|group| {
            view! {
                <section class="tool-group">
                    <h2>{group.name}</h2>
                    <div class="tool-grid">
                        {group.entries.iter().map(tool_card).collect_view()}
                    </div>
                </section>
            }
        })
        .collect_view();

    let popular = hot_tools()
        .map(|entry| {
            view! {
                <a href=entry.to class="popular-chip">
                    <IconGlyph icon=entry.icon />
                    {entry.name}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <header class="hero">
                <h1>{config.site_name.clone()}</h1>
                <p class="tagline">"AI assistants that work where your customers already are"</p>
                <div class="cta">
                    <a href="/contacts" class="btn btn-primary">"Get in Touch"</a>
                </div>
            </header>

            <section class="popular">
                <h2>"Popular"</h2>
                <div class="popular-row">{popular}</div>
            </section>

            {groups}
        </div>
    }
}
