pub mod gemini;

use crate::errors::ModerationError;
use crate::types::AnalysisContent;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for invoking an external moderation model.
///
/// This defines a common interface for submitting content for evaluation and
/// receiving the model's raw text output, which callers parse as a structured
/// verdict. One invocation performs exactly one outbound call; retries are a
/// caller decision.
#[async_trait]
pub trait ModerationProvider: Send + Sync + Debug + DynClone {
    /// Submits the content for evaluation and returns the model's raw text
    /// output.
    async fn moderate(&self, content: &AnalysisContent) -> Result<String, ModerationError>;
}

dyn_clone::clone_trait_object!(ModerationProvider);
