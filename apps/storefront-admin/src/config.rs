//! # Admin Configuration
//!
//! Configuration management for the admin and checkout binary.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_DATA_DIR=/srv/storefront                                │
//! │     STOREFRONT_OWNER_EMAIL=owner@example.com                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.admin/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [store]
//! name = "Ferris Goods"
//! currency_symbol = "$"
//! data_dir = "/srv/storefront"
//! slot = "storefront_orders"
//!
//! [notifications]
//! owner_email = "owner@ferris.shop"
//! from_name = "Ferris Goods"
//! enabled = true
//!
//! [checkout]
//! reference_prefix = "ORD-"
//! simulated_payment_delay_ms = 2000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::validation::validate_email;
use storefront_core::{Sender, ORDER_REFERENCE_PREFIX};
use storefront_store::{StoreConfig, DEFAULT_SLOT};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Store Settings
// =============================================================================

/// Storefront identity and where its orders live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store name used in emails and CLI headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Symbol prefixed to amounts in CLI output.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Directory holding the order slot file.
    /// Falls back to the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Slot (file stem) holding the order collection.
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
            data_dir: None,
            slot: default_slot(),
        }
    }
}

// =============================================================================
// Notification Settings
// =============================================================================

/// Order notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Where owner notifications go.
    #[serde(default = "default_owner_email")]
    pub owner_email: String,

    /// Display name on outgoing mail. Defaults to the store name.
    #[serde(default)]
    pub from_name: Option<String>,

    /// Dispatch notifications after checkout.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_owner_email() -> String {
    "owner@example.com".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            owner_email: default_owner_email(),
            from_name: None,
            enabled: true,
        }
    }
}

// =============================================================================
// Checkout Settings
// =============================================================================

/// Checkout behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Prefix of generated order references.
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,

    /// How long the simulated gateway takes to confirm (milliseconds).
    #[serde(default = "default_payment_delay")]
    pub simulated_payment_delay_ms: u64,
}

fn default_reference_prefix() -> String {
    ORDER_REFERENCE_PREFIX.to_string()
}

fn default_payment_delay() -> u64 {
    2000
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            reference_prefix: default_reference_prefix(),
            simulated_payment_delay_ms: default_payment_delay(),
        }
    }
}

// =============================================================================
// Main Admin Configuration
// =============================================================================

/// Complete admin configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,
}

impl AdminConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading admin config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store.name must not be empty".into()));
        }

        let slot = &self.store.slot;
        if slot.is_empty()
            || !slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::Invalid(format!(
                "store.slot must be letters, digits, '_' or '-', got: '{}'",
                slot
            )));
        }

        if self.notifications.enabled {
            validate_email(&self.notifications.owner_email).map_err(|e| {
                ConfigError::Invalid(format!("notifications.owner_email: {}", e))
            })?;
        }

        if self.checkout.reference_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "checkout.reference_prefix must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            self.store.currency_symbol = symbol;
        }

        if let Some(dir) = lookup("STOREFRONT_DATA_DIR") {
            debug!(dir = %dir, "Overriding data directory from environment");
            self.store.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(slot) = lookup("STOREFRONT_SLOT") {
            debug!(slot = %slot, "Overriding slot from environment");
            self.store.slot = slot;
        }

        if let Some(email) = lookup("STOREFRONT_OWNER_EMAIL") {
            self.notifications.owner_email = email;
        }

        if let Some(enabled) = lookup("STOREFRONT_NOTIFICATIONS_ENABLED") {
            match enabled.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.notifications.enabled = true,
                "0" | "false" | "no" | "off" => self.notifications.enabled = false,
                _ => warn!(value = %enabled, "Unknown notifications flag in environment"),
            }
        }

        if let Some(prefix) = lookup("STOREFRONT_REFERENCE_PREFIX") {
            self.checkout.reference_prefix = prefix;
        }

        if let Some(delay) = lookup("STOREFRONT_PAYMENT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => {
                    debug!(delay_ms = ms, "Overriding payment delay from environment");
                    self.checkout.simulated_payment_delay_ms = ms;
                }
                Err(_) => warn!(value = %delay, "Invalid payment delay in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "admin")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Directory holding the order slot.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.storefront.admin/`
    /// - **Windows**: `%APPDATA%\storefront\admin\data\`
    /// - **Linux**: `~/.local/share/admin/`
    ///
    /// Falls back to `./data` when no home directory is known.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.store.data_dir {
            return dir.clone();
        }

        directories::ProjectDirs::from("com", "storefront", "admin")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"))
    }

    /// File-backed store configuration for the configured slot.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.data_dir()).slot(self.store.slot.clone())
    }

    /// Identity used when composing emails.
    pub fn sender(&self) -> Sender {
        Sender {
            store_name: self
                .notifications
                .from_name
                .clone()
                .unwrap_or_else(|| self.store.name.clone()),
            owner_email: self.notifications.owner_email.clone(),
        }
    }

    /// Delay of the simulated payment gateway.
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.checkout.simulated_payment_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();
        assert_eq!(config.store.slot, "storefront_orders");
        assert_eq!(config.checkout.reference_prefix, "ORD-");
        assert_eq!(config.checkout.simulated_payment_delay_ms, 2000);
        assert!(config.notifications.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: AdminConfig = toml::from_str(
            r#"
            [store]
            name = "Ferris Goods"
            data_dir = "/srv/storefront"

            [checkout]
            simulated_payment_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Ferris Goods");
        assert_eq!(config.store.currency_symbol, "$");
        assert_eq!(config.data_dir(), PathBuf::from("/srv/storefront"));
        assert_eq!(config.payment_delay(), Duration::ZERO);
        assert_eq!(config.checkout.reference_prefix, "ORD-");
    }

    #[test]
    fn test_config_validation() {
        let mut config = AdminConfig::default();

        config.store.slot = "../orders".to_string();
        assert!(config.validate().is_err());

        config.store.slot = "orders_v2".to_string();
        config.notifications.owner_email = "not-an-email".to_string();
        assert!(config.validate().is_err());

        // Owner email only matters when notifications are on
        config.notifications.enabled = false;
        assert!(config.validate().is_ok());

        config.checkout.reference_prefix = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOREFRONT_DATA_DIR", "/tmp/shop"),
            ("STOREFRONT_SLOT", "demo_orders"),
            ("STOREFRONT_NOTIFICATIONS_ENABLED", "off"),
            ("STOREFRONT_PAYMENT_DELAY_MS", "fast"),
        ]
        .into_iter()
        .collect();

        let mut config = AdminConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/shop"));
        assert_eq!(config.store.slot, "demo_orders");
        assert!(!config.notifications.enabled);
        // Unparseable values are ignored
        assert_eq!(config.checkout.simulated_payment_delay_ms, 2000);
    }

    #[test]
    fn test_sender_uses_from_name() {
        let mut config = AdminConfig::default();
        config.store.name = "Ferris Goods".to_string();
        assert_eq!(config.sender().store_name, "Ferris Goods");

        config.notifications.from_name = Some("Ferris Support".to_string());
        assert_eq!(config.sender().store_name, "Ferris Support");
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AdminConfig::default()).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[checkout]"));
    }
}
