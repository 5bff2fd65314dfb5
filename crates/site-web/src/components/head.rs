//! Page head ownership

use leptos::prelude::*;
use site_core::{PageHead, PageMeta};

/// Claim the document title/description for the calling page.
///
/// Must run inside a page component; ownership is released when the page
/// unmounts, the text stays until the next page claims the slot.
pub fn claim_page_head(owner: &'static str, meta: PageMeta) {
    let head = expect_context::<RwSignal<PageHead>>();
    head.update(|h| h.claim(owner, &meta));
    on_cleanup(move || {
        head.try_update(|h| h.release(owner));
    });
}
