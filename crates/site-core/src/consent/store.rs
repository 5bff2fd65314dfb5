//! Consent Persistence

use super::{ConsentSettings, ConsentStatus};
use crate::config::{CONSENT_STORAGE_KEY, DIALOG_HINT_STORAGE_KEY};
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Reads and writes the consent record in durable client storage.
///
/// Reads never fail: an absent, unreadable or corrupt record is reported
/// as "no consent stored" and yields the default record.
pub struct ConsentStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ConsentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load(&self) -> Option<ConsentSettings> {
        let raw = match self.storage.get_item(CONSENT_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Consent storage unreadable: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!("Ignoring corrupt consent record: {}", e);
                None
            }
        }
    }

    fn persist(&self, settings: &ConsentSettings) -> Result<()> {
        let raw = serde_json::to_string(settings)?;
        self.storage.set_item(CONSENT_STORAGE_KEY, &raw)?;
        tracing::debug!(record = %raw, "Consent record saved");
        Ok(())
    }

    /// True iff a readable consent record exists
    pub fn has_stored_consent(&self) -> bool {
        self.load().is_some()
    }

    /// Stored record, or the default record when none exists
    pub fn get_stored_consent(&self) -> ConsentSettings {
        self.load().unwrap_or_default()
    }

    /// Grant every category and persist, replacing any prior record
    pub fn accept_all_consent(&self, _current: &ConsentSettings) -> Result<ConsentSettings> {
        let settings = ConsentSettings::uniform(ConsentStatus::Granted);
        self.persist(&settings)?;
        Ok(settings)
    }

    /// Deny every category and persist, replacing any prior record
    pub fn reject_all_consent(&self, _current: &ConsentSettings) -> Result<ConsentSettings> {
        let settings = ConsentSettings::uniform(ConsentStatus::Denied);
        self.persist(&settings)?;
        Ok(settings)
    }

    /// Persist exactly the given record
    pub fn update_custom_consent(&self, settings: &ConsentSettings) -> Result<()> {
        self.persist(settings)
    }

    /// Remember that the dialog was open when the user followed a policy link
    pub fn mark_dialog_open(&self) -> Result<()> {
        self.storage.set_item(DIALOG_HINT_STORAGE_KEY, "true")
    }

    /// Read and clear the "dialog was open" hint
    pub fn take_dialog_hint(&self) -> bool {
        let hint = match self.storage.get_item(DIALOG_HINT_STORAGE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("Dialog hint unreadable: {}", e);
                false
            }
        };
        if hint {
            if let Err(e) = self.storage.remove_item(DIALOG_HINT_STORAGE_KEY) {
                tracing::warn!("Failed to clear dialog hint: {}", e);
            }
        }
        hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentCategory;
    use crate::error::SiteError;
    use crate::storage::MemoryStore;

    /// Storage whose every operation fails, like a browser with storage disabled
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(SiteError::Storage("disabled".into()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(SiteError::Storage("disabled".into()))
        }
        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(SiteError::Storage("disabled".into()))
        }
    }

    #[test]
    fn test_absent_record_is_default() {
        let store = ConsentStore::new(MemoryStore::new());
        assert!(!store.has_stored_consent());
        assert_eq!(store.get_stored_consent(), ConsentSettings::default());
    }

    #[test]
    fn test_accept_all_round_trip() {
        let store = ConsentStore::new(MemoryStore::new());
        let current = ConsentSettings::default().toggled(ConsentCategory::Marketing);

        store.accept_all_consent(&current).unwrap();

        assert!(store.has_stored_consent());
        assert!(store.get_stored_consent().all(ConsentStatus::Granted));
    }

    #[test]
    fn test_reject_all_round_trip() {
        let store = ConsentStore::new(MemoryStore::new());
        store
            .accept_all_consent(&ConsentSettings::default())
            .unwrap();

        store
            .reject_all_consent(&store.get_stored_consent())
            .unwrap();

        assert!(store.get_stored_consent().all(ConsentStatus::Denied));
    }

    #[test]
    fn test_custom_round_trip_identity() {
        let store = ConsentStore::new(MemoryStore::new());
        let custom = ConsentSettings::default()
            .toggled(ConsentCategory::Necessary)
            .toggled(ConsentCategory::Personalization);

        store.update_custom_consent(&custom).unwrap();

        assert_eq!(store.get_stored_consent(), custom);
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let memory = MemoryStore::new();
        memory.set_item(CONSENT_STORAGE_KEY, "{not json").unwrap();
        let store = ConsentStore::new(&memory);

        assert!(!store.has_stored_consent());
        assert_eq!(store.get_stored_consent(), ConsentSettings::default());
    }

    #[test]
    fn test_broken_storage_never_fails_reads() {
        let store = ConsentStore::new(BrokenStore);
        assert!(!store.has_stored_consent());
        assert_eq!(store.get_stored_consent(), ConsentSettings::default());
        assert!(!store.take_dialog_hint());
        assert!(store.update_custom_consent(&ConsentSettings::default()).is_err());
    }

    #[test]
    fn test_dialog_hint_consumed_once() {
        let store = ConsentStore::new(MemoryStore::new());
        assert!(!store.take_dialog_hint());

        store.mark_dialog_open().unwrap();
        assert!(store.take_dialog_hint());
        assert!(!store.take_dialog_hint());
    }
}
