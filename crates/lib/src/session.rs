//! # Analysis Session State
//!
//! The UI-facing state holder for one moderation workspace: input text, an
//! optional attached image, the latest verdict, and the loading/error flags.
//! Submissions are guarded so that empty content is never sent and only one
//! request is in flight at a time.

use crate::{
    attachment::ImageAttachment,
    types::{AnalysisContent, AnalysisResult},
};

/// Fallback message when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Linguistic analysis failed. Please check your connection.";

/// The observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No result, no request outstanding.
    Idle,
    /// A request is in flight; submission is disabled, input stays editable.
    Analyzing,
    /// A verdict is populated.
    Ready,
    /// An error message is populated.
    Failed,
}

/// State machine over one submission cycle.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    text: String,
    image: Option<String>,
    analyzing: bool,
    result: Option<AnalysisResult>,
    error: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.analyzing {
            SessionPhase::Analyzing
        } else if self.result.is_some() {
            SessionPhase::Ready
        } else if self.error.is_some() {
            SessionPhase::Failed
        } else {
            SessionPhase::Idle
        }
    }

    /// Text stays editable in every phase, including while analyzing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attaches raw image bytes. An oversized image records the size-limit
    /// error and leaves the attachment unset; no request is issued.
    pub fn attach_image(&mut self, bytes: &[u8], mime_type: &str) {
        match ImageAttachment::from_bytes(bytes, mime_type) {
            Ok(attachment) => {
                self.image = Some(attachment.into_data_url());
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The current input as submittable content.
    pub fn content(&self) -> AnalysisContent {
        AnalysisContent {
            text: if self.text.trim().is_empty() {
                None
            } else {
                Some(self.text.clone())
            },
            image: self.image.clone(),
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.analyzing && !self.content().is_empty()
    }

    /// Starts a scan: returns the content to submit, or `None` when the
    /// guard refuses (empty content, or a request already outstanding).
    pub fn begin(&mut self) -> Option<AnalysisContent> {
        if !self.can_submit() {
            return None;
        }
        self.analyzing = true;
        self.error = None;
        Some(self.content())
    }

    /// Records a successful verdict.
    pub fn complete(&mut self, result: AnalysisResult) {
        self.analyzing = false;
        self.result = Some(result);
    }

    /// Records a failure; a missing message falls back to the generic
    /// connectivity message.
    pub fn fail(&mut self, message: Option<String>) {
        self.analyzing = false;
        self.result = None;
        self.error = Some(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        );
    }

    /// Manual reset: clears text, image, result, and error from any state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
