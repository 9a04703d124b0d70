use crate::{
    errors::ModerationError,
    policy::{response_schema, IMAGE_INSTRUCTION, SYSTEM_INSTRUCTION},
    providers::ai::ModerationProvider,
    types::AnalysisContent,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Fixed MIME type for inline image payloads.
const IMAGE_MIME_TYPE: &str = "image/jpeg";

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Part {
    Text(String),
    InlineData(InlineData),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: String,
}

// --- Gemini Provider implementation ---

/// A provider for invoking the Google Gemini API with the moderation policy
/// instruction and a schema-constrained JSON response format.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, ModerationError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ModerationError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    fn build_parts(content: &AnalysisContent) -> Vec<Part> {
        let mut parts = Vec::new();
        if let Some(text) = content.text.as_deref().filter(|t| !t.is_empty()) {
            parts.push(Part::Text(format!("Content for moderation: \"{text}\"")));
        }
        if let Some(image) = content.image.as_deref().filter(|i| !i.is_empty()) {
            parts.push(Part::InlineData(InlineData {
                mime_type: IMAGE_MIME_TYPE.to_string(),
                data: strip_data_url_prefix(image).to_string(),
            }));
            parts.push(Part::Text(IMAGE_INSTRUCTION.to_string()));
        }
        parts
    }
}

/// Drops the `data:<mime>;base64,` prefix, leaving the bare base64 payload.
/// Input without a comma is passed through unchanged.
fn strip_data_url_prefix(data_url: &str) -> &str {
    match data_url.split_once(',') {
        Some((_, payload)) => payload,
        None => data_url,
    }
}

#[async_trait]
impl ModerationProvider for GeminiProvider {
    /// Performs one `generateContent` call carrying the policy instruction,
    /// the content parts, and the response schema constraint.
    async fn moderate(&self, content: &AnalysisContent) -> Result<String, ModerationError> {
        let request_body = GeminiRequest {
            system_instruction: Content {
                parts: vec![Part::Text(SYSTEM_INSTRUCTION.to_string())],
            },
            contents: vec![Content {
                parts: Self::build_parts(content),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(ModerationError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ModerationError::AiApi(error_text));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(ModerationError::AiDeserialization)?;

        let raw_text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default();

        if raw_text.is_empty() {
            return Err(ModerationError::EmptyResponse);
        }

        Ok(raw_text)
    }
}
