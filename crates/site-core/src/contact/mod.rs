//! Contact Form
//!
//! Field state, the validation gate, and the submission pipeline that
//! posts to the hosting platform's form handler.
//!
//! ```text
//!   ┌──────┐ begin_submit ┌────────────┐  2xx   ┌─────────┐
//!   │ Idle │ ───────────▶ │ Submitting │ ─────▶ │ Success │
//!   └──────┘              └────────────┘        └─────────┘
//!      ▲  ▲  error / non-2xx    │                    │
//!      │  └─────────────────────┘                    │
//!      └──────────── expire_success(ticket) ─────────┘
//! ```

mod countries;
mod form;
mod submission;

pub use countries::{CountryCode, COUNTRY_CODES};
pub use form::{ContactForm, FormPhase, Rejection, SubmitOutcome, SuccessTicket};
pub use submission::{
    deliver, AnalyticsEvent, AnalyticsSink, FormData, FormSubmission, FormTransport,
    PreparedSubmission,
};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Services a visitor can express interest in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Service {
    AiChatBot,
    AiVoiceBot,
    CustomDevelopment,
    AiAvatar,
    AiAssistant,
    Counseling,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::AiChatBot,
        Service::AiVoiceBot,
        Service::CustomDevelopment,
        Service::AiAvatar,
        Service::AiAssistant,
        Service::Counseling,
    ];

    /// Identifier sent to analytics and the form handler
    pub fn id(&self) -> &'static str {
        match self {
            Service::AiChatBot => "aiChatBot",
            Service::AiVoiceBot => "aiVoiceBot",
            Service::CustomDevelopment => "customDevelopment",
            Service::AiAvatar => "aiAvatar",
            Service::AiAssistant => "aiAssistant",
            Service::Counseling => "counseling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::AiChatBot => "AI Chat Bot",
            Service::AiVoiceBot => "AI Voice Bot",
            Service::CustomDevelopment => "Custom Development",
            Service::AiAvatar => "AI Avatar",
            Service::AiAssistant => "AI Assistant",
            Service::Counseling => "Counseling",
        }
    }
}

/// Set of selected services, iterated in declaration order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceSelection {
    selected: BTreeSet<Service>,
}

impl ServiceSelection {
    pub fn is_selected(&self, service: Service) -> bool {
        self.selected.contains(&service)
    }

    /// Copy of this selection with one service flipped
    pub fn toggled(&self, service: Service) -> Self {
        let mut next = self.clone();
        if !next.selected.remove(&service) {
            next.selected.insert(service);
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().map(|s| s.id().to_string()).collect()
    }
}

/// Free-text fields of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    CompanyName,
    Email,
    Phone,
    Message,
    /// Hidden field only bots fill in
    Honeypot,
}

impl FormField {
    /// HTML `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::CompanyName => "companyName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
            FormField::Honeypot => "bot-field",
        }
    }
}

/// Everything the visitor has entered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub first_name: String,
    pub company_name: String,
    pub email: String,
    pub country_code: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
    pub honeypot: String,
    pub services: ServiceSelection,
}

impl ContactFormState {
    /// Empty state with the given country code preselected
    pub fn empty(country_code: impl Into<String>) -> Self {
        Self {
            first_name: String::new(),
            company_name: String::new(),
            email: String::new(),
            country_code: country_code.into(),
            phone: String::new(),
            message: String::new(),
            consent: false,
            honeypot: String::new(),
            services: ServiceSelection::default(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::CompanyName => &self.company_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
            FormField::Honeypot => &self.honeypot,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::CompanyName => &mut self.company_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
            FormField::Honeypot => &mut self.honeypot,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Phone number as sent: `"<country code> <number>"`
    pub fn composed_phone(&self) -> String {
        format!("{} {}", self.country_code, self.phone)
    }

    /// First required field left empty, if any. Same rule as the native
    /// `required` attribute: whitespace counts as a value.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.first_name.is_empty() {
            Some(FormField::FirstName.name())
        } else if self.email.is_empty() {
            Some(FormField::Email.name())
        } else if !self.consent {
            Some("consent")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_selection_order() {
        let selection = ServiceSelection::default()
            .toggled(Service::Counseling)
            .toggled(Service::AiChatBot)
            .toggled(Service::AiAvatar)
            .toggled(Service::AiAvatar);

        assert_eq!(selection.ids(), vec!["aiChatBot", "counseling"]);
        assert!(!selection.is_selected(Service::AiAvatar));
    }

    #[test]
    fn test_composed_phone() {
        let mut state = ContactFormState::empty("+49");
        state.set_field(FormField::Phone, "30 1234567");
        assert_eq!(state.composed_phone(), "+49 30 1234567");
    }

    #[test]
    fn test_missing_required() {
        let mut state = ContactFormState::empty("+49");
        assert_eq!(state.missing_required(), Some("firstName"));

        state.set_field(FormField::FirstName, "Ada");
        assert_eq!(state.missing_required(), Some("email"));

        state.set_field(FormField::Email, "ada@example.com");
        assert_eq!(state.missing_required(), Some("consent"));

        state.consent = true;
        assert_eq!(state.missing_required(), None);
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut state = ContactFormState::empty("+49");
        state.set_field(FormField::FirstName, "  ");
        state.set_field(FormField::Email, " ");
        state.consent = true;
        assert_eq!(state.missing_required(), None);
    }
}
