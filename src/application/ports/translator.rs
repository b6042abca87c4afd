use async_trait::async_trait;

use crate::domain::LocaleCode;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Returns `text` unchanged when the provider yields no translation.
    async fn translate(&self, text: &str, target: &LocaleCode) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
