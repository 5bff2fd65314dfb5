//! Site Configuration
//!
//! Values the WASM bundle bakes in at compile time. `SITE_NAME` and
//! `SITE_URL` may be overridden through the build environment; everything
//! else is fixed by the hosting platform's form handling.

use std::time::Duration;

use crate::error::{Result, SiteError};

/// Storage key holding the serialized consent record
pub const CONSENT_STORAGE_KEY: &str = "consent_settings";

/// Storage key marking that the consent dialog was open during a policy-link navigation
pub const DIALOG_HINT_STORAGE_KEY: &str = "consent_dialog_open";

/// Static site configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Brand name appended to page titles
    pub site_name: String,

    /// Absolute origin (no trailing slash), used when the page origin is unknown
    pub site_url: String,

    /// Form identifier expected by the form-handling backend
    pub form_name: String,

    /// Same-origin path the contact form posts to
    pub submit_path: String,

    /// How long the success view stays up before reverting to the empty form
    pub success_display: Duration,

    /// Country code preselected in the phone input
    pub default_country_code: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Emerald AI".into(),
            site_url: "https://emerald-ai.io".into(),
            form_name: "contact".into(),
            submit_path: "/".into(),
            success_display: Duration::from_secs(5),
            default_country_code: "+49".into(),
        }
    }
}

impl SiteConfig {
    /// Build from compile-time environment, falling back to defaults
    pub fn from_build_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(name) = option_env!("SITE_NAME") {
            config.site_name = name.to_string();
        }
        if let Some(url) = option_env!("SITE_URL") {
            config.site_url = url.trim_end_matches('/').to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the rest of the crate relies on
    pub fn validate(&self) -> Result<()> {
        if !self.site_url.starts_with("http://") && !self.site_url.starts_with("https://") {
            return Err(SiteError::Config(format!(
                "site_url must be absolute, got '{}'",
                self.site_url
            )));
        }
        if !self.submit_path.starts_with('/') {
            return Err(SiteError::Config("submit_path must be same-origin".into()));
        }
        if self.form_name.is_empty() {
            return Err(SiteError::Config("form_name must not be empty".into()));
        }
        Ok(())
    }

    /// Absolute URL for a site path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.success_display, Duration::from_secs(5));
        assert_eq!(config.default_country_code, "+49");
    }

    #[test]
    fn test_relative_site_url_rejected() {
        let config = SiteConfig {
            site_url: "emerald-ai.io".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_absolute_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.absolute_url("/tools/jira"),
            "https://emerald-ai.io/tools/jira"
        );
    }
}
