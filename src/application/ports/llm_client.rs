use async_trait::async_trait;

use crate::domain::EncodedImage;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one user message made of `prompt` and, when present, `image`.
    async fn complete(
        &self,
        prompt: &str,
        image: Option<&EncodedImage>,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
