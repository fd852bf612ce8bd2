//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the application works without a config file.

use serde::{Deserialize, Serialize};

use crate::app::state::Screen;
use crate::shopping::IdPolicy;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Screen shown at launch.
    #[serde(default)]
    pub start_screen: Screen,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long a status bar message stays up.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_screen: Screen::default(),
            tick_rate_ms: default_tick_rate(),
            status_timeout_secs: default_status_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingConfig {
    #[serde(default)]
    pub id_policy: IdPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ring the terminal bell when an add is rejected.
    #[serde(default = "default_true")]
    pub bell_on_error: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            bell_on_error: true,
        }
    }
}

/// Diagnostic log file settings. Off by default so nothing writes to the
/// terminal while the TUI owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    250
}

fn default_status_timeout() -> u64 {
    4
}

fn default_log_dir() -> String {
    "~/.local/share/trolley/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.start_screen, Screen::Counter);
        assert_eq!(config.ui.status_timeout_secs, 4);
        assert_eq!(config.shopping.id_policy, IdPolicy::Monotonic);
        assert!(config.behavior.bell_on_error);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_fill_in_the_rest() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            start_screen = "shopping"

            [shopping]
            id_policy = "list-length"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.start_screen, Screen::Shopping);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.shopping.id_policy, IdPolicy::ListLength);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.log_dir, "~/.local/share/trolley/logs");
    }

    #[test]
    fn unknown_id_policy_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[shopping]\nid_policy = \"random\"");
        assert!(result.is_err());
    }
}
