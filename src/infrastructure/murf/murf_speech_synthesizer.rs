use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioPlayer, SpeechSynthesizer, SynthesisError};

pub const DEFAULT_AUDIO_FORMAT: &str = "WAV";

/// Murf text-to-speech: generate, download the returned audio URL, write, then try to play it.
pub struct MurfSpeechSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
    format: String,
    player: Arc<dyn AudioPlayer>,
}

impl MurfSpeechSynthesizer {
    pub fn new(
        client: Client,
        api_key: String,
        base_url: String,
        format: String,
        player: Arc<dyn AudioPlayer>,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            format,
            player,
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, SynthesisError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SynthesisError::DownloadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynthesisError::DownloadFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSpeechRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct GenerateSpeechResponse {
    #[serde(rename = "audioFile", alias = "audio_file", default)]
    audio_file: Option<String>,
    #[serde(alias = "audioUrl", default)]
    audio_url: Option<String>,
}

impl GenerateSpeechResponse {
    fn into_audio_url(self) -> Option<String> {
        self.audio_file
            .into_iter()
            .chain(self.audio_url)
            .find(|url| !url.trim().is_empty())
    }
}

#[async_trait]
impl SpeechSynthesizer for MurfSpeechSynthesizer {
    #[tracing::instrument(skip_all, fields(voice_id = %voice_id, output = %output.display()))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        output: &Path,
    ) -> Result<(), SynthesisError> {
        let request_body = GenerateSpeechRequest {
            text,
            voice_id,
            format: &self.format,
        };

        let response = self
            .client
            .post(format!("{}/v1/speech/generate", self.base_url))
            .header("api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SynthesisError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let generated: GenerateSpeechResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        let audio_url = generated
            .into_audio_url()
            .ok_or(SynthesisError::MissingAudioUrl)?;

        let audio = self.download(&audio_url).await?;
        tokio::fs::write(output, &audio)
            .await
            .map_err(|source| SynthesisError::Io {
                path: output.to_path_buf(),
                source,
            })?;

        tracing::info!(bytes = audio.len(), "Speech audio written");

        if let Err(e) = self.player.play(output).await {
            tracing::warn!(error = %e, "Local playback failed");
        }

        Ok(())
    }
}
