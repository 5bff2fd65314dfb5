//! Submission Payloads and Pipeline

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ContactFormState;
use crate::error::Result;

/// Analytics event pushed once per submission that passes the gate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event: String,
    pub form_name: String,
    pub form_data: FormData,
}

/// Payload of [`AnalyticsEvent`]; the message body itself is never tracked
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub has_message: bool,
    pub selected_services: Vec<String>,
    pub consent: bool,
    /// ISO-8601, millisecond precision, UTC
    pub submission_timestamp: String,
    pub page_url: String,
}

impl AnalyticsEvent {
    pub fn form_submission(state: &ContactFormState, page_url: &str, now: DateTime<Utc>) -> Self {
        Self {
            event: "form_submission".into(),
            form_name: "contact_form".into(),
            form_data: FormData {
                name: state.first_name.clone(),
                company: state.company_name.clone(),
                email: state.email.clone(),
                phone: state.composed_phone(),
                has_message: !state.message.is_empty(),
                selected_services: state.services.ids(),
                consent: state.consent,
                submission_timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                page_url: page_url.to_string(),
            },
        }
    }
}

/// URL-encoded body posted to the form handler
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    #[serde(rename = "form-name")]
    pub form_name: String,
    pub name: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// `"true"` or `"false"`
    pub consent: String,
    /// Service ids joined with `", "`
    #[serde(rename = "selectedServices")]
    pub selected_services: String,
}

impl FormSubmission {
    pub fn from_state(form_name: &str, state: &ContactFormState) -> Self {
        Self {
            form_name: form_name.to_string(),
            name: state.first_name.clone(),
            company_name: state.company_name.clone(),
            email: state.email.clone(),
            phone: state.composed_phone(),
            message: state.message.clone(),
            consent: state.consent.to_string(),
            selected_services: state.services.ids().join(", "),
        }
    }

    /// Service ids split back out of the joined field
    pub fn services(&self) -> Vec<&str> {
        self.selected_services
            .split(", ")
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Everything one accepted submission sends out
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedSubmission {
    pub event: AnalyticsEvent,
    pub body: FormSubmission,
}

/// Delivers a submission to the form endpoint (Strategy pattern)
///
/// Returns the HTTP status; transport failures are `SiteError::Transport`.
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(&self, body: &FormSubmission) -> Result<u16>;
}

/// Append-only analytics event queue on the host page
pub trait AnalyticsSink {
    fn push(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Send a submission that passed `ContactForm::begin_submit`: the
/// analytics event first, then the POST. Settle the answer with
/// `ContactForm::finish_submit`.
///
/// Analytics failures are logged and do not block delivery. There is no
/// retry; a failed attempt leaves the fields in place for resubmission.
pub async fn deliver<T, A>(prepared: &PreparedSubmission, transport: &T, analytics: &A) -> Result<u16>
where
    T: FormTransport + ?Sized,
    A: AnalyticsSink + ?Sized,
{
    if let Err(e) = analytics.push(&prepared.event) {
        tracing::warn!("Analytics push failed: {}", e);
    }

    transport.post_form(&prepared.body).await
}
