//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it at
//! startup. The state holds the configuration and the instantiated moderation
//! provider, both read-only across requests; each request is independent and
//! stateless.

use crate::config::Config;
use safeguard::providers::ai::{gemini::GeminiProvider, ModerationProvider};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<Config>,
    /// The moderation model provider.
    pub provider: Arc<dyn ModerationProvider>,
}

/// Builds the shared application state from the configuration.
///
/// The model credential is required here: the proxy refuses to start without
/// it rather than failing per request.
pub fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let api_key = config.require_api_key()?;
    let provider = GeminiProvider::new(config.moderation_api_url.clone(), api_key)?;
    tracing::info!(api_url = %config.moderation_api_url, "Initialized moderation provider (Gemini).");

    Ok(AppState {
        config: Arc::new(config),
        provider: Arc::new(provider),
    })
}
