use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes `text` with `voice_id` and writes the audio bytes to `output`.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        output: &Path,
    ) -> Result<(), SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("audio url not found in synthesis response")]
    MissingAudioUrl,
    #[error("audio download failed: {0}")]
    DownloadFailed(String),
    #[error("failed to write audio {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
