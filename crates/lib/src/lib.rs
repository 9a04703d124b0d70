//! # SafeGuard
//!
//! This crate provides the moderation contract between a client, a
//! server-side proxy, and an external generative model: the shared data
//! model, the schema-constrained policy prompt, the Gemini provider, the
//! client request gateway, and the presentation/state layer (session state
//! machine, severity tiers, report export).

pub mod attachment;
pub mod client;
pub mod display;
pub mod errors;
pub mod policy;
pub mod providers;
pub mod report;
pub mod session;
pub mod types;

pub use client::ModerationClient;
pub use errors::ModerationError;
pub use types::{AnalysisContent, AnalysisResult, Metric, Recommendation};

use providers::ai::ModerationProvider;
use tracing::debug;

/// Runs one moderation pass: invokes the provider and parses its raw text
/// output as a structured verdict.
///
/// A single attempt per call; callers decide whether to resubmit. Text that
/// fails to parse as an [`AnalysisResult`] surfaces as
/// [`ModerationError::ResultParse`].
pub async fn moderate_content(
    provider: &dyn ModerationProvider,
    content: &AnalysisContent,
) -> Result<AnalysisResult, ModerationError> {
    let raw = provider.moderate(content).await?;
    debug!(bytes = raw.len(), "Received raw moderation verdict");
    let result: AnalysisResult = serde_json::from_str(&raw)?;
    Ok(result)
}
