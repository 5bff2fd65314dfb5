//! API Client

use async_trait::async_trait;

use site_core::contact::{FormSubmission, FormTransport};
use site_core::{Result, SiteConfig, SiteError};

use crate::browser;

/// Posts the contact form to the hosting platform's form handler
pub struct FetchTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl FetchTransport {
    pub fn new(config: &SiteConfig) -> Self {
        // reqwest needs an absolute URL even for same-origin requests
        let endpoint = match browser::origin() {
            Some(origin) => format!("{}{}", origin, config.submit_path),
            None => config.absolute_url(&config.submit_path),
        };
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait(?Send)]
impl FormTransport for FetchTransport {
    async fn post_form(&self, body: &FormSubmission) -> Result<u16> {
        // `form` sets Content-Type: application/x-www-form-urlencoded
        let response = self
            .client
            .post(&self.endpoint)
            .form(body)
            .send()
            .await
            .map_err(|e| SiteError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
