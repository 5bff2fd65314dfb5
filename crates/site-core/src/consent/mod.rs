//! Cookie Consent
//!
//! Per-category consent record, its persistence, and the banner state
//! machine that drives it.
//!
//! ```text
//!             customize            toggle(c)
//!   ┌─────────┐ ────────▶ ┌────────┐ ◀──┐
//!   │ Summary │           │ Detail │ ───┘
//!   └─────────┘ ◀──────── └────────┘
//!     │    close                │ save
//!     │ accept-all / reject-all ▼
//!     └──────────────────▶ ┌────────┐
//!                          │ Hidden │
//!                          └────────┘
//! ```

mod dialog;
mod store;

pub use dialog::{ConsentDialog, DialogView, PolicyLink};
pub use store::ConsentStore;

use serde::{Deserialize, Serialize};

/// Purpose a user can grant or deny data processing for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentCategory {
    /// Strictly necessary storage, granted unless the user opts out
    Necessary,
    Analytics,
    Marketing,
    Personalization,
}

impl ConsentCategory {
    /// Every recognized category, in display order
    pub const ALL: [ConsentCategory; 4] = [
        ConsentCategory::Necessary,
        ConsentCategory::Analytics,
        ConsentCategory::Marketing,
        ConsentCategory::Personalization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "necessary",
            ConsentCategory::Analytics => "analytics",
            ConsentCategory::Marketing => "marketing",
            ConsentCategory::Personalization => "personalization",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "Necessary",
            ConsentCategory::Analytics => "Analytics",
            ConsentCategory::Marketing => "Marketing",
            ConsentCategory::Personalization => "Personalization",
        }
    }

    /// Status a fresh visitor starts with
    pub fn default_status(&self) -> ConsentStatus {
        match self {
            ConsentCategory::Necessary => ConsentStatus::Granted,
            _ => ConsentStatus::Denied,
        }
    }
}

impl std::fmt::Display for ConsentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-valued consent status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Granted,
    Denied,
}

impl ConsentStatus {
    pub fn flipped(self) -> Self {
        match self {
            ConsentStatus::Granted => ConsentStatus::Denied,
            ConsentStatus::Denied => ConsentStatus::Granted,
        }
    }

    pub fn is_granted(self) -> bool {
        self == ConsentStatus::Granted
    }
}

/// Consent record: one status per category, every category always present.
///
/// Keys missing from a stored record deserialize to their default status,
/// so older records stay readable when categories are added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentSettings {
    pub necessary: ConsentStatus,
    pub analytics: ConsentStatus,
    pub marketing: ConsentStatus,
    pub personalization: ConsentStatus,
}

impl Default for ConsentSettings {
    fn default() -> Self {
        Self {
            necessary: ConsentCategory::Necessary.default_status(),
            analytics: ConsentCategory::Analytics.default_status(),
            marketing: ConsentCategory::Marketing.default_status(),
            personalization: ConsentCategory::Personalization.default_status(),
        }
    }
}

impl ConsentSettings {
    /// Record with every category set to `status`
    pub fn uniform(status: ConsentStatus) -> Self {
        Self {
            necessary: status,
            analytics: status,
            marketing: status,
            personalization: status,
        }
    }

    pub fn get(&self, category: ConsentCategory) -> ConsentStatus {
        match category {
            ConsentCategory::Necessary => self.necessary,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Personalization => self.personalization,
        }
    }

    /// Copy of this record with one category replaced
    pub fn with(&self, category: ConsentCategory, status: ConsentStatus) -> Self {
        let mut next = self.clone();
        match category {
            ConsentCategory::Necessary => next.necessary = status,
            ConsentCategory::Analytics => next.analytics = status,
            ConsentCategory::Marketing => next.marketing = status,
            ConsentCategory::Personalization => next.personalization = status,
        }
        next
    }

    /// Copy of this record with one category flipped
    pub fn toggled(&self, category: ConsentCategory) -> Self {
        self.with(category, self.get(category).flipped())
    }

    /// Iterate categories in display order
    pub fn iter(&self) -> impl Iterator<Item = (ConsentCategory, ConsentStatus)> + '_ {
        ConsentCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn all(&self, status: ConsentStatus) -> bool {
        self.iter().all(|(_, s)| s == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only_necessary_granted() {
        let settings = ConsentSettings::default();
        assert!(settings.necessary.is_granted());
        for category in &ConsentCategory::ALL[1..] {
            assert_eq!(settings.get(*category), ConsentStatus::Denied);
        }
    }

    #[test]
    fn test_toggle_is_copy_on_write() {
        let original = ConsentSettings::default();
        let toggled = original.toggled(ConsentCategory::Analytics);

        assert_eq!(original.analytics, ConsentStatus::Denied);
        assert_eq!(toggled.analytics, ConsentStatus::Granted);
        assert_eq!(toggled.toggled(ConsentCategory::Analytics), original);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ConsentSettings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "necessary": "granted",
                "analytics": "denied",
                "marketing": "denied",
                "personalization": "denied",
            })
        );
    }

    #[test]
    fn test_missing_keys_are_filled() {
        let settings: ConsentSettings =
            serde_json::from_str(r#"{"marketing":"granted"}"#).unwrap();
        assert_eq!(settings.marketing, ConsentStatus::Granted);
        assert_eq!(settings.necessary, ConsentStatus::Granted);
        assert_eq!(settings.analytics, ConsentStatus::Denied);
        assert_eq!(settings.iter().count(), ConsentCategory::ALL.len());
    }
}
