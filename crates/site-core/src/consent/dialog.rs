//! Consent Banner State Machine

use super::{ConsentCategory, ConsentSettings, ConsentStore};
use crate::storage::KeyValueStore;

/// Which face of the banner is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogView {
    Hidden,
    Summary,
    Detail,
}

/// Policy pages reachable from the banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyLink {
    Privacy,
    CookiePolicy,
}

impl PolicyLink {
    pub fn path(&self) -> &'static str {
        match self {
            PolicyLink::Privacy => "/privacy",
            PolicyLink::CookiePolicy => "/cookie-policy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyLink::Privacy => "Privacy Policy",
            PolicyLink::CookiePolicy => "Cookie Policy",
        }
    }
}

/// Banner state: the visible view plus the locally edited record.
///
/// Local toggles stay in memory until `save`; only `accept_all`,
/// `reject_all` and `save` touch storage. Requests that are not valid in
/// the current view are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentDialog {
    view: DialogView,
    settings: ConsentSettings,
}

impl ConsentDialog {
    /// Initial state at mount: hidden once a record exists, summary otherwise
    pub fn mount<S: KeyValueStore>(store: &ConsentStore<S>) -> Self {
        let view = if store.has_stored_consent() {
            DialogView::Hidden
        } else {
            DialogView::Summary
        };
        Self {
            view,
            settings: store.get_stored_consent(),
        }
    }

    pub fn view(&self) -> DialogView {
        self.view
    }

    pub fn is_visible(&self) -> bool {
        self.view != DialogView::Hidden
    }

    /// Locally edited record
    pub fn settings(&self) -> &ConsentSettings {
        &self.settings
    }

    /// summary → detail
    pub fn customize(&mut self) {
        if self.view == DialogView::Summary {
            self.view = DialogView::Detail;
        }
    }

    /// detail → summary
    pub fn close_details(&mut self) {
        if self.view == DialogView::Detail {
            self.view = DialogView::Summary;
        }
    }

    /// detail → detail, flipping one category in memory only
    pub fn toggle(&mut self, category: ConsentCategory) {
        if self.view == DialogView::Detail {
            self.settings = self.settings.toggled(category);
        }
    }

    /// summary → hidden, granting everything
    pub fn accept_all<S: KeyValueStore>(&mut self, store: &ConsentStore<S>) {
        if self.view != DialogView::Summary {
            return;
        }
        match store.accept_all_consent(&self.settings) {
            Ok(settings) => self.settings = settings,
            Err(e) => tracing::warn!("Failed to persist accept-all consent: {}", e),
        }
        self.view = DialogView::Hidden;
    }

    /// summary → hidden, denying everything
    pub fn reject_all<S: KeyValueStore>(&mut self, store: &ConsentStore<S>) {
        if self.view != DialogView::Summary {
            return;
        }
        match store.reject_all_consent(&self.settings) {
            Ok(settings) => self.settings = settings,
            Err(e) => tracing::warn!("Failed to persist reject-all consent: {}", e),
        }
        self.view = DialogView::Hidden;
    }

    /// detail → hidden, persisting the local record as-is
    pub fn save<S: KeyValueStore>(&mut self, store: &ConsentStore<S>) {
        if self.view != DialogView::Detail {
            return;
        }
        if let Err(e) = store.update_custom_consent(&self.settings) {
            tracing::warn!("Failed to persist custom consent: {}", e);
        }
        self.view = DialogView::Hidden;
    }

    /// Record the "dialog was open" hint before navigating to a policy page.
    ///
    /// Returns the path to navigate to. Nothing is written while hidden.
    pub fn follow_policy_link<S: KeyValueStore>(
        &self,
        store: &ConsentStore<S>,
        link: PolicyLink,
    ) -> &'static str {
        if self.is_visible() {
            if let Err(e) = store.mark_dialog_open() {
                tracing::warn!("Failed to record dialog hint: {}", e);
            }
        }
        link.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentStatus;
    use crate::storage::MemoryStore;

    fn fresh() -> ConsentStore<MemoryStore> {
        ConsentStore::new(MemoryStore::new())
    }

    #[test]
    fn test_initial_view_without_record() {
        let store = fresh();
        let dialog = ConsentDialog::mount(&store);
        assert!(!store.has_stored_consent());
        assert_eq!(dialog.view(), DialogView::Summary);
    }

    #[test]
    fn test_initial_view_with_record() {
        let store = fresh();
        store
            .update_custom_consent(&ConsentSettings::default())
            .unwrap();
        assert_eq!(ConsentDialog::mount(&store).view(), DialogView::Hidden);
    }

    #[test]
    fn test_accept_all_hides_and_persists() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);

        dialog.accept_all(&store);

        assert_eq!(dialog.view(), DialogView::Hidden);
        assert!(store.has_stored_consent());
        assert!(store.get_stored_consent().all(ConsentStatus::Granted));
        assert_eq!(ConsentDialog::mount(&store).view(), DialogView::Hidden);
    }

    #[test]
    fn test_reject_all_hides_and_persists() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);

        dialog.reject_all(&store);

        assert_eq!(dialog.view(), DialogView::Hidden);
        assert!(store.get_stored_consent().all(ConsentStatus::Denied));
    }

    #[test]
    fn test_toggles_are_local_until_save() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);

        dialog.customize();
        assert_eq!(dialog.view(), DialogView::Detail);

        dialog.toggle(ConsentCategory::Analytics);
        dialog.toggle(ConsentCategory::Marketing);
        dialog.toggle(ConsentCategory::Marketing);
        assert!(!store.has_stored_consent());
        assert_eq!(dialog.settings().analytics, ConsentStatus::Granted);

        dialog.save(&store);

        assert_eq!(dialog.view(), DialogView::Hidden);
        assert_eq!(&store.get_stored_consent(), dialog.settings());
        assert_eq!(store.get_stored_consent().marketing, ConsentStatus::Denied);
    }

    #[test]
    fn test_necessary_is_not_pinned() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);
        assert_eq!(dialog.settings().necessary, ConsentStatus::Granted);

        dialog.customize();
        dialog.toggle(ConsentCategory::Necessary);
        dialog.save(&store);

        assert_eq!(store.get_stored_consent().necessary, ConsentStatus::Denied);
    }

    #[test]
    fn test_close_details_returns_to_summary() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);

        dialog.customize();
        dialog.close_details();

        assert_eq!(dialog.view(), DialogView::Summary);
        assert!(!store.has_stored_consent());
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);

        // toggle and save belong to the detail view
        dialog.toggle(ConsentCategory::Analytics);
        dialog.save(&store);
        assert_eq!(dialog.view(), DialogView::Summary);
        assert_eq!(dialog.settings(), &ConsentSettings::default());
        assert!(!store.has_stored_consent());

        // accept-all belongs to the summary view
        dialog.customize();
        dialog.accept_all(&store);
        assert_eq!(dialog.view(), DialogView::Detail);
        assert!(!store.has_stored_consent());

        // nothing reopens a hidden dialog
        dialog.save(&store);
        dialog.customize();
        dialog.close_details();
        assert_eq!(dialog.view(), DialogView::Hidden);
    }

    #[test]
    fn test_policy_link_records_hint_while_open() {
        let store = fresh();
        let dialog = ConsentDialog::mount(&store);

        let path = dialog.follow_policy_link(&store, PolicyLink::CookiePolicy);

        assert_eq!(path, "/cookie-policy");
        assert!(store.take_dialog_hint());
    }

    #[test]
    fn test_policy_link_no_hint_when_hidden() {
        let store = fresh();
        let mut dialog = ConsentDialog::mount(&store);
        dialog.reject_all(&store);

        let path = dialog.follow_policy_link(&store, PolicyLink::Privacy);

        assert_eq!(path, "/privacy");
        assert!(!store.take_dialog_hint());
    }
}
