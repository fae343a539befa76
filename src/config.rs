//! Configuration and settings management
//!
//! Loads relay settings from config files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use teloxide::types::ChatId;

/// Relay settings loaded from environment variables and optional config files
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// Destination channel identifier (e.g. `-1001234567890`)
    pub channel_id: i64,

    /// Disable link previews on forwarded text messages
    #[serde(default = "default_true")]
    pub disable_link_preview: bool,

    /// Send forwarded photos without a notification
    #[serde(default = "default_true")]
    pub silent_photos: bool,
}

const fn default_true() -> bool {
    true
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use deal_relay::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails or a required key is missing.
    pub fn new() -> Result<Self, ConfigError> {
        build_config()?.try_deserialize()
    }

    /// Destination chat for forwarded messages
    #[must_use]
    pub const fn destination(&self) -> ChatId {
        ChatId(self.channel_id)
    }
}

/// Build the layered configuration source.
///
/// # Errors
///
/// Returns a `ConfigError` if a present config file cannot be parsed.
pub fn build_config() -> Result<Config, ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        // Local overrides, not checked into git
        .add_source(File::with_name("config/local").required(false))
        // Eg.. `APP__CHANNEL_ID=-100123 ./target/deal-relay`
        .add_source(Environment::with_prefix("APP").separator("__"))
        // Plain UPPER_SNAKE_CASE env vars; empty values count as unset
        .add_source(Environment::default().ignore_empty(true))
        .build()
}
