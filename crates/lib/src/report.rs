//! Report export: the verdict serialized either as pretty-printed JSON or as
//! the fixed plain-text summary template, with download file names stamped by
//! epoch milliseconds.

use crate::{errors::ModerationError, types::AnalysisResult};
use chrono::Utc;

/// The two export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Text => "text",
        }
    }
}

/// Renders the full verdict in the requested format.
///
/// JSON is a 2-space pretty print of the complete result; text is the fixed
/// summary template with flagged phrases comma-and-space joined.
pub fn render(result: &AnalysisResult, format: ReportFormat) -> Result<String, ModerationError> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        ReportFormat::Text => Ok(format!(
            "SAFEGUARD AI MODERATION REPORT\n\
             ============================\n\
             VERDICT: {}\n\
             SEVERITY: {}\n\
             LANGUAGE: {}\n\
             REASONING: {}\n\
             FLAGGED PHRASES: {}",
            result.recommendation,
            result.overall_score,
            result.detected_language,
            result.reasoning,
            result.flagged_phrases.join(", "),
        )),
    }
}

/// The download file name for an export produced now.
pub fn file_name(format: ReportFormat) -> String {
    format!(
        "guard-report-{}.{}",
        Utc::now().timestamp_millis(),
        format.extension()
    )
}
