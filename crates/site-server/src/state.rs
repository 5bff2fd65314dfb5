//! Application State

use std::sync::Arc;

use site_core::SiteConfig;

use crate::config::{ServerConfig, ServerError};

/// Served when the bundle has not been built yet
const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><meta name=\"description\" content=\"\"><title>Preview</title></head>\
<body><p>Frontend bundle not built. Run <code>trunk build</code> in crates/site-web.</p></body></html>";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SPA shell returned for every page route
    pub index_html: Arc<str>,

    /// Site settings, for the form name the handler accepts
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(index_html: impl Into<Arc<str>>, site: SiteConfig) -> Self {
        Self {
            index_html: index_html.into(),
            site: Arc::new(site),
        }
    }

    /// Load the SPA shell from the static directory
    pub async fn load(config: &ServerConfig, site: SiteConfig) -> Result<Self, ServerError> {
        let path = config.index_path();
        let index_html = match tokio::fs::read_to_string(&path).await {
            Ok(html) => html,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("⚠ {} not found - serving placeholder shell", path.display());
                PLACEHOLDER_INDEX.to_string()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self::new(index_html, site))
    }
}
