//! Browser Adapters
//!
//! `localStorage`, `window.dataLayer` and the document head behind the
//! traits `site-core` expects. A missing window or disabled storage
//! degrades to no-ops or errors, never panics.

use wasm_bindgen::{JsCast, JsValue};

use site_core::consent::ConsentStore;
use site_core::contact::{AnalyticsEvent, AnalyticsSink};
use site_core::{KeyValueStore, PageHead, Result, SiteError};

/// `window.localStorage`, if the browser grants access
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

fn storage_error(err: JsValue) -> SiteError {
    SiteError::Storage(format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(storage_error),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(storage_error),
            None => Err(SiteError::Storage("localStorage unavailable".into())),
        }
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.remove_item(key).map_err(storage_error),
            None => Ok(()),
        }
    }
}

/// Consent store over `localStorage`
pub fn consent_store() -> ConsentStore<BrowserStorage> {
    ConsentStore::new(BrowserStorage::local())
}

/// Tag-manager event queue at `window.dataLayer`, created on first push
pub struct DataLayer;

fn analytics_error(err: JsValue) -> SiteError {
    SiteError::Analytics(format!("{:?}", err))
}

impl AnalyticsSink for DataLayer {
    fn push(&self, event: &AnalyticsEvent) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| SiteError::Analytics("no window".into()))?;
        let key = JsValue::from_str("dataLayer");

        let existing = js_sys::Reflect::get(&window, &key).map_err(analytics_error)?;
        let layer: js_sys::Array = if existing.is_undefined() || existing.is_null() {
            let layer = js_sys::Array::new();
            js_sys::Reflect::set(&window, &key, &layer).map_err(analytics_error)?;
            layer
        } else {
            existing
                .dyn_into()
                .map_err(|_| SiteError::Analytics("dataLayer is not an array".into()))?
        };

        let json = serde_json::to_string(event)?;
        let value = js_sys::JSON::parse(&json).map_err(analytics_error)?;
        layer.push(&value);
        Ok(())
    }
}

/// Current page URL, empty outside a browser
pub fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Current origin, e.g. `https://emerald-ai.io`
pub fn origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Write the page-head slot into `document.title` and the description meta tag
pub fn apply_head(head: &PageHead) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if head.title().is_empty() {
        return;
    }

    document.set_title(head.title());
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        if let Err(e) = meta.set_attribute("content", head.description()) {
            log::warn!("Failed to update meta description: {:?}", e);
        }
    }
}
