use thiserror::Error;

/// Custom error types for the moderation pipeline.
#[derive(Error, Debug)]
pub enum ModerationError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the moderation model: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the moderation model response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Moderation model returned an error: {0}")]
    AiApi(String),
    #[error("Moderation engine failed to produce a valid response.")]
    EmptyResponse,
    #[error("Model output is not a valid analysis result: {0}")]
    ResultParse(#[from] serde_json::Error),
    #[error("Nothing to analyze: submission carries neither text nor image")]
    EmptyContent,
    #[error("Image size exceeds {limit_bytes} byte limit ({actual_bytes} bytes)")]
    ImageTooLarge {
        limit_bytes: usize,
        actual_bytes: usize,
    },
    #[error("Moderation API error: {status} {body}")]
    Api { status: u16, body: String },
}
