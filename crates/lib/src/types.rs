//! # Core Data Model
//!
//! The shared types for one moderation round trip: the content a user
//! submits, and the structured verdict the model returns. Wire names are
//! camelCase to match the `/api/moderate` contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of input sent for evaluation.
///
/// At least one of the two fields must be present for a submission to be
/// allowed; callers check [`AnalysisContent::is_empty`] before sending.
/// The image, when present, is a base64 data URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AnalysisContent {
    /// Returns true when there is nothing to analyze. Whitespace-only text
    /// does not count as content.
    pub fn is_empty(&self) -> bool {
        let has_text = self
            .text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let has_image = self.image.as_deref().is_some_and(|i| !i.is_empty());
        !has_text && !has_image
    }
}

/// The fixed set of evaluation categories named in the policy instruction.
///
/// The model is asked to score these six, but the wire schema leaves
/// `Metric::category` a free string, so responses are not hard-constrained
/// to this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    HateSpeech,
    Harassment,
    SexuallyExplicit,
    DangerousContent,
    Toxicity,
    Insult,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 6] = [
        ContentCategory::HateSpeech,
        ContentCategory::Harassment,
        ContentCategory::SexuallyExplicit,
        ContentCategory::DangerousContent,
        ContentCategory::Toxicity,
        ContentCategory::Insult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::HateSpeech => "Hate Speech",
            ContentCategory::Harassment => "Harassment",
            ContentCategory::SexuallyExplicit => "Sexually Explicit",
            ContentCategory::DangerousContent => "Dangerous Content",
            ContentCategory::Toxicity => "Toxicity",
            ContentCategory::Insult => "Insult",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One risk category with its score in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub category: String,
    pub score: f64,
}

/// The three-valued verdict derived from overall severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "ALLOW")]
    Allow,
    #[serde(rename = "FLAG")]
    Flag,
    #[serde(rename = "BLOCK")]
    Block,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Allow => "ALLOW",
            Recommendation::Flag => "FLAG",
            Recommendation::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete verdict for one submission, as returned by the model.
///
/// Metric order is preserved as returned; category uniqueness is not
/// guaranteed by the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub metrics: Vec<Metric>,
    pub reasoning: String,
    pub flagged_phrases: Vec<String>,
    pub recommendation: Recommendation,
    pub detected_language: String,
}
