use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{LanguageDetector, TranscriptionEngine, TranscriptionError};
use crate::domain::{BASELINE_LANGUAGE, Transcript};

/// Turns an audio file into transcript text plus a locally detected language.
pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    detector: Arc<dyn LanguageDetector>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, detector: Arc<dyn LanguageDetector>) -> Self {
        Self { engine, detector }
    }

    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub async fn transcribe_file(&self, path: &Path) -> Result<Transcript, TranscriptionServiceError> {
        let audio = tokio::fs::read(path)
            .await
            .map_err(|source| TranscriptionServiceError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav");

        let text = self.engine.transcribe(&audio, file_name).await?;

        // The provider's own language guess is ignored; branching uses local detection only.
        let language = match self.detector.detect(&text) {
            Some(code) => code,
            None => {
                tracing::warn!(
                    chars = text.len(),
                    fallback = BASELINE_LANGUAGE,
                    "Language detection gave no result, using baseline language"
                );
                BASELINE_LANGUAGE.to_string()
            }
        };

        tracing::info!(chars = text.len(), language = %language, "Audio transcribed");

        Ok(Transcript::new(text, language))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("failed to read audio {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transcription: {0}")]
    Engine(#[from] TranscriptionError),
}
