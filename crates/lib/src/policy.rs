//! # Moderation Policy
//!
//! The pinned policy instruction and output schema sent with every model
//! invocation. Classification itself is external; this module is the full
//! extent of the contract we hold the model to. The instruction text is kept
//! byte-for-byte stable since the model's behavior is prompt-sensitive.

use crate::types::Recommendation;
use serde_json::{json, Value};

/// System instruction describing the six evaluation categories, the scoring
/// range, phrase extraction, and the recommendation tier mapping.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a world-class AI Content Moderator and Forensic Linguist. 
Analyze the input (text and/or image) for potential safety violations.

CATEGORIES TO EVALUATE:
1. Hate Speech: Attacks on protected groups.
2. Harassment: Targeted bullying or sexual advances.
3. Sexually Explicit: Gratuitous or non-consensual sexual content.
4. Dangerous Content: Promotion of self-harm, violence, or illegal acts.
5. Toxicity: General rudeness or inflammatory language.
6. Insult: Targeted disparagement.

DIRECTIONS:
- Identify the language and provide cultural context.
- Toxicity scores must be 0.0 to 1.0.
- Extract the exact problematic phrases (tokens) in their original language.
- Recommendation: "ALLOW" (0-0.39), "FLAG" (0.4-0.69), "BLOCK" (0.7-1.0).
- Reasoning must be concise and objective.

YOU MUST RETURN VALID JSON."#;

/// Instruction appended after inline image data.
pub const IMAGE_INSTRUCTION: &str =
    "Examine this image for visual abuse or embedded text that violates safety policies.";

/// Scores below this map to ALLOW.
pub const ALLOW_BELOW: f64 = 0.4;
/// Scores below this (and at or above [`ALLOW_BELOW`]) map to FLAG.
pub const FLAG_BELOW: f64 = 0.7;

impl Recommendation {
    /// Maps an overall severity score to the three-tier verdict, using the
    /// same thresholds the policy instruction dictates to the model.
    pub fn from_score(score: f64) -> Self {
        if score < ALLOW_BELOW {
            Recommendation::Allow
        } else if score < FLAG_BELOW {
            Recommendation::Flag
        } else {
            Recommendation::Block
        }
    }
}

/// The `responseSchema` constraining the model output to the
/// `AnalysisResult` shape, with `recommendation` limited to its three-value
/// enum and every field required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": { "type": "NUMBER", "description": "Normalized score 0-1" },
            "metrics": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "score": { "type": "NUMBER" }
                    },
                    "required": ["category", "score"]
                }
            },
            "reasoning": { "type": "STRING" },
            "flaggedPhrases": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "recommendation": { "type": "STRING", "enum": ["ALLOW", "FLAG", "BLOCK"] },
            "detectedLanguage": { "type": "STRING" }
        },
        "required": [
            "overallScore",
            "metrics",
            "reasoning",
            "flaggedPhrases",
            "recommendation",
            "detectedLanguage"
        ]
    })
}
