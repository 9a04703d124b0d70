//! # Client Request Gateway
//!
//! The browser-side half of the contract: posts an [`AnalysisContent`] to the
//! moderation proxy and normalizes transport failures into a uniform error
//! shape. One request per call; no retries, no timeout beyond the transport
//! default.

use crate::{errors::ModerationError, types::AnalysisContent, types::AnalysisResult};
use reqwest::Client as ReqwestClient;

/// A thin client for the moderation proxy's `/api/moderate` endpoint.
#[derive(Clone, Debug)]
pub struct ModerationClient {
    client: ReqwestClient,
    endpoint_url: String,
}

impl ModerationClient {
    /// Creates a new `ModerationClient` pointed at the proxy endpoint.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self, ModerationError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ModerationError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    /// Submits content for analysis and returns the proxy's verdict.
    ///
    /// Empty content is rejected locally without issuing a request. A
    /// non-success status fails with the status code and response body text.
    /// A successful body is trusted as-is: it is deserialized into
    /// [`AnalysisResult`] with no further validation.
    pub async fn analyze(
        &self,
        content: &AnalysisContent,
    ) -> Result<AnalysisResult, ModerationError> {
        if content.is_empty() {
            return Err(ModerationError::EmptyContent);
        }

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(content)
            .send()
            .await
            .map_err(ModerationError::AiRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(ModerationError::AiDeserialization)
    }
}
