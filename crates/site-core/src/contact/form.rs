//! Contact Form State Container

use chrono::{DateTime, Utc};

use super::submission::{AnalyticsEvent, FormSubmission, PreparedSubmission};
use super::{ContactFormState, FormField, Service};
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

/// Display phase of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success,
}

/// Why a submission was refused before reaching the network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A submission is in flight or the success view is showing
    Busy,
    /// Honeypot filled; treated as a bot
    Honeypot,
    NoServiceSelected,
    /// Required field left blank (HTML `name`)
    MissingField(&'static str),
}

/// Identifies one success view; only the latest ticket may revert it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuccessTicket(u64);

/// Result of settling an accepted submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Delivered; schedule `expire_success` with this ticket
    Sent(SuccessTicket),
    /// Not delivered; fields are left as entered
    Failed(SiteError),
    /// The form was unmounted before the response arrived
    Discarded,
}

/// Single-owner state container for one mounted contact form
#[derive(Clone, Debug)]
pub struct ContactForm {
    state: ContactFormState,
    phase: FormPhase,
    form_name: String,
    default_country_code: String,
    generation: u64,
    mounted: bool,
}

impl ContactForm {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            state: ContactFormState::empty(config.default_country_code.clone()),
            phase: FormPhase::Idle,
            form_name: config.form_name.clone(),
            default_country_code: config.default_country_code.clone(),
            generation: 0,
            mounted: true,
        }
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the submit control must be disabled
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fields only accept input while idle; edits during a submission or
    /// the success view are dropped so the revert lands on an empty form.
    pub fn is_editable(&self) -> bool {
        self.mounted && self.phase == FormPhase::Idle
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        if self.is_editable() {
            self.state.set_field(field, value);
        }
    }

    pub fn set_consent(&mut self, consent: bool) {
        if self.is_editable() {
            self.state.consent = consent;
        }
    }

    pub fn set_country_code(&mut self, code: impl Into<String>) {
        if self.is_editable() {
            self.state.country_code = code.into();
        }
    }

    pub fn toggle_service(&mut self, service: Service) {
        if self.is_editable() {
            self.state.services = self.state.services.toggled(service);
        }
    }

    /// Apply the validation gate and, if it passes, enter `Submitting`.
    ///
    /// Returns the analytics event and form body to send. A rejected
    /// attempt leaves the form idle and sends nothing.
    pub fn begin_submit(
        &mut self,
        page_url: &str,
        now: DateTime<Utc>,
    ) -> std::result::Result<PreparedSubmission, Rejection> {
        if self.phase != FormPhase::Idle {
            return Err(Rejection::Busy);
        }
        if !self.state.honeypot.is_empty() {
            tracing::debug!("Honeypot field filled, dropping submission");
            return Err(Rejection::Honeypot);
        }
        if self.state.services.is_empty() {
            tracing::debug!("No service selected, submission refused");
            return Err(Rejection::NoServiceSelected);
        }
        if let Some(field) = self.state.missing_required() {
            tracing::debug!(field, "Required field missing, submission refused");
            return Err(Rejection::MissingField(field));
        }

        self.phase = FormPhase::Submitting;
        Ok(PreparedSubmission {
            event: AnalyticsEvent::form_submission(&self.state, page_url, now),
            body: FormSubmission::from_state(&self.form_name, &self.state),
        })
    }

    /// Settle the in-flight submission with the endpoint's answer
    pub fn finish_submit(&mut self, response: Result<u16>) -> SubmitOutcome {
        if !self.mounted {
            tracing::debug!("Submission settled after unmount, ignoring");
            return SubmitOutcome::Discarded;
        }
        if self.phase != FormPhase::Submitting {
            return SubmitOutcome::Discarded;
        }

        let error = match response {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(
                    services = %self.state.services.ids().join(", "),
                    "Contact form submitted"
                );
                self.state = ContactFormState::empty(self.default_country_code.clone());
                self.phase = FormPhase::Success;
                self.generation += 1;
                return SubmitOutcome::Sent(SuccessTicket(self.generation));
            }
            Ok(status) => SiteError::Status(status),
            Err(e) => e,
        };

        tracing::error!("Form submission error: {}", error);
        self.phase = FormPhase::Idle;
        SubmitOutcome::Failed(error)
    }

    /// Leave the success view. Stale tickets and unmounted forms are ignored.
    pub fn expire_success(&mut self, ticket: SuccessTicket) -> bool {
        if !self.mounted || self.phase != FormPhase::Success || ticket.0 != self.generation {
            return false;
        }
        self.phase = FormPhase::Idle;
        true
    }

    /// Detach from the view; later responses and timers become no-ops
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }
}
