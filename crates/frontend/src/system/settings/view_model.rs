use contracts::system::settings::{load_settings_or_default, SystemSettings};
use leptos::prelude::*;

/// ViewModel for the settings page
///
/// - `form` is edited in place by the view (`form.update(..)`)
/// - `saved` is the last accepted state, used by reset and dirty tracking
#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub form: RwSignal<SystemSettings>,
    pub saved: RwSignal<SystemSettings>,
    pub error: RwSignal<Option<String>>,
}

impl SettingsViewModel {
    /// Starts from `document` when given and valid, otherwise from the embedded defaults.
    pub fn new(document: Option<&str>) -> Self {
        let settings = load_settings_or_default(document);
        Self {
            form: RwSignal::new(settings.clone()),
            saved: RwSignal::new(settings),
            error: RwSignal::new(None),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.form.with(|form| self.saved.with(|saved| form != saved))
    }

    pub fn save_command(&self) {
        let current = self.form.get_untracked();
        match current.validate() {
            Ok(()) => {
                log::info!("settings saved for '{}'", current.general.company_name);
                self.saved.set(current);
                self.error.set(None);
            }
            Err(e) => {
                log::warn!("settings rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn reset_form(&self) {
        self.form.set(self.saved.get_untracked());
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::Theme;

    #[test]
    fn test_save_and_reset() {
        let vm = SettingsViewModel::new(None);
        assert!(!vm.is_dirty());

        vm.form.update(|f| f.appearance.theme = Theme::Dark);
        assert!(vm.is_dirty());
        vm.save_command();
        assert!(!vm.is_dirty());
        assert_eq!(vm.saved.get_untracked().appearance.theme, Theme::Dark);

        vm.form.update(|f| f.general.company_name = "Other".to_string());
        vm.reset_form();
        assert_eq!(vm.form.get_untracked().general.company_name, "Smart Inventory Corp");
    }

    #[test]
    fn test_invalid_form_is_not_saved() {
        let vm = SettingsViewModel::new(None);
        vm.form.update(|f| f.notifications.notification_email = "nobody".to_string());
        vm.save_command();
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("invalid notification email: \"nobody\"")
        );
        assert!(vm.is_dirty());
    }

    #[test]
    fn test_override_document() {
        let vm = SettingsViewModel::new(Some("[backup]\nretention_days = 90"));
        assert_eq!(vm.form.get_untracked().backup.retention_days, 90);

        let fallback = SettingsViewModel::new(Some("[security]\nsession_timeout_minutes = 5"));
        assert_eq!(fallback.form.get_untracked(), SystemSettings::default());
    }
}
