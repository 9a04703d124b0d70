//! # Application Configuration
//!
//! Configuration for the `safeguard-server`, loaded from environment
//! variables layered over programmatic defaults. The model credential is
//! injected here at startup and stays server-side; it is never serialized
//! into any response.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;

/// Default Gemini endpoint for the moderation model.
const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    General(String),
    MissingCredential,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::MissingCredential => write!(
                f,
                "GEMINI_API_KEY is not set. The moderation proxy cannot start without the model credential."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The server configuration.
///
/// Environment variables: `PORT`, `MODERATION_API_URL`, `GEMINI_API_KEY`.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// The port for the server to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The model endpoint the proxy forwards to.
    #[serde(default = "default_api_url")]
    pub moderation_api_url: String,
    /// The model credential. Required.
    #[serde(default)]
    pub gemini_api_key: Option<String>,
}

fn default_port() -> u16 {
    9090
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Returns the credential, failing when it is absent or blank.
    pub fn require_api_key(&self) -> Result<String, ConfigError> {
        self.gemini_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential)
    }
}

/// Loads the configuration from environment variables over the defaults.
pub fn get_config() -> Result<Config, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?;

    let config: Config = settings.try_deserialize()?;
    Ok(config)
}
