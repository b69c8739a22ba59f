//! System settings form model.
//!
//! Defaults are embedded as a TOML document. A caller may pass its own
//! document; sections and keys it leaves out keep their default values.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[general]
company_name = "Smart Inventory Corp"
time_zone = "est"
currency = "usd"
language = "en"

[notifications]
low_stock_alerts = true
order_confirmations = true
ai_predictions = true
email_notifications = true
notification_email = "admin@company.com"

[inventory]
default_reorder_threshold_percent = 20
default_lead_time_days = 7
auto_generate_skus = true
track_serial_numbers = false

[security]
session_timeout_minutes = 30
two_factor_auth = false
password_requirements = true
login_attempt_limit = true

[appearance]
theme = "light"
accent_color = "blue"
compact_mode = false

[backup]
automatic_backups = true
backup_frequency = "daily"
retention_days = 30
"#;

/// Options offered by the session timeout dropdown, in minutes.
pub const SESSION_TIMEOUT_OPTIONS: [u32; 4] = [15, 30, 60, 120];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("company name must not be empty")]
    EmptyCompanyName,

    #[error("invalid notification email: {0:?}")]
    InvalidEmail(String),

    #[error("reorder threshold must be within 0..=100, got {0}")]
    ThresholdOutOfRange(u32),

    #[error("unsupported session timeout: {0} minutes")]
    UnsupportedSessionTimeout(u32),
}

// ---------------------------------------------------------------------------
// Option enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZone {
    #[default]
    Est,
    Cst,
    Mst,
    Pst,
}

impl TimeZone {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeZone::Est => "Eastern Standard Time",
            TimeZone::Cst => "Central Standard Time",
            TimeZone::Mst => "Mountain Standard Time",
            TimeZone::Pst => "Pacific Standard Time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
}

impl Currency {
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "USD - US Dollar",
            Currency::Eur => "EUR - Euro",
            Currency::Gbp => "GBP - British Pound",
            Currency::Cad => "CAD - Canadian Dollar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub company_name: String,
    pub time_zone: TimeZone,
    pub currency: Currency,
    pub language: Language,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "Smart Inventory Corp".to_string(),
            time_zone: TimeZone::Est,
            currency: Currency::Usd,
            language: Language::En,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub low_stock_alerts: bool,
    pub order_confirmations: bool,
    pub ai_predictions: bool,
    pub email_notifications: bool,
    pub notification_email: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            low_stock_alerts: true,
            order_confirmations: true,
            ai_predictions: true,
            email_notifications: true,
            notification_email: "admin@company.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    pub default_reorder_threshold_percent: u32,
    pub default_lead_time_days: u32,
    pub auto_generate_skus: bool,
    pub track_serial_numbers: bool,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            default_reorder_threshold_percent: 20,
            default_lead_time_days: 7,
            auto_generate_skus: true,
            track_serial_numbers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub session_timeout_minutes: u32,
    pub two_factor_auth: bool,
    pub password_requirements: bool,
    pub login_attempt_limit: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            session_timeout_minutes: 30,
            two_factor_auth: false,
            password_requirements: true,
            login_attempt_limit: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub compact_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    pub automatic_backups: bool,
    pub backup_frequency: BackupFrequency,
    pub retention_days: u32,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            automatic_backups: true,
            backup_frequency: BackupFrequency::Daily,
            retention_days: 30,
        }
    }
}

/// Everything on the settings page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub general: GeneralSettings,
    pub notifications: NotificationSettings,
    pub inventory: InventorySettings,
    pub security: SecuritySettings,
    pub appearance: AppearanceSettings,
    pub backup: BackupSettings,
}

impl SystemSettings {
    /// Parses a settings document and validates it.
    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        let settings: SystemSettings = toml::from_str(document)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.general.company_name.trim().is_empty() {
            return Err(SettingsError::EmptyCompanyName);
        }
        let email = &self.notifications.notification_email;
        if !email.contains('@') {
            return Err(SettingsError::InvalidEmail(email.clone()));
        }
        let threshold = self.inventory.default_reorder_threshold_percent;
        if threshold > 100 {
            return Err(SettingsError::ThresholdOutOfRange(threshold));
        }
        let timeout = self.security.session_timeout_minutes;
        if !SESSION_TIMEOUT_OPTIONS.contains(&timeout) {
            return Err(SettingsError::UnsupportedSessionTimeout(timeout));
        }
        Ok(())
    }
}

/// Loads settings from `document`, or from the embedded defaults when none is given.
pub fn load_settings(document: Option<&str>) -> anyhow::Result<SystemSettings> {
    match document {
        Some(doc) => {
            log::info!("Loading settings from supplied document");
            SystemSettings::from_toml_str(doc).context("loading settings document")
        }
        None => {
            log::info!("Using default embedded settings");
            SystemSettings::from_toml_str(DEFAULT_SETTINGS).context("loading default settings")
        }
    }
}

/// Like [`load_settings`] but falls back to defaults when the document is rejected.
pub fn load_settings_or_default(document: Option<&str>) -> SystemSettings {
    match load_settings(document) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Settings rejected, using defaults: {:#}", err);
            SystemSettings::default()
        }
    }
}
