use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use serde::Deserialize;

use crate::infrastructure::audio::{DEFAULT_GROQ_BASE_URL, DEFAULT_TRANSCRIPTION_MODEL};
use crate::infrastructure::llm::DEFAULT_CHAT_MODEL;
use crate::infrastructure::murf::{DEFAULT_AUDIO_FORMAT, DEFAULT_MURF_BASE_URL};

use super::{Environment, UnknownEnvironment};

pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const MURF_API_KEY_VAR: &str = "MURF_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub groq: GroqSettings,
    pub murf: MurfSettings,
    pub output: OutputSettings,
    pub playback: PlaybackSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqSettings {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub transcription_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MurfSettings {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub audio_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Environment(#[from] UnknownEnvironment),
    #[error("missing required environment variable {0}")]
    MissingApiKey(&'static str),
}

impl Settings {
    /// Loads settings for `APP_ENVIRONMENT` and requires both provider API keys.
    pub fn load() -> Result<Self, SettingsError> {
        let environment = Environment::from_lookup(|name| std::env::var(name).ok())?;

        let mut settings = Self::load_for(environment)?;
        settings.apply_api_keys(|name| std::env::var(name).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults, then `appsettings.<env>` if present, then `APP_`-prefixed variables
    /// (`APP_SERVER__PORT=8080` sets `server.port`).
    pub fn load_for(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 10000_i64)?
            .set_default("server.max_upload_mb", 25_i64)?
            .set_default("groq.base_url", DEFAULT_GROQ_BASE_URL)?
            .set_default("groq.chat_model", DEFAULT_CHAT_MODEL)?
            .set_default("groq.transcription_model", DEFAULT_TRANSCRIPTION_MODEL)?
            .set_default("murf.base_url", DEFAULT_MURF_BASE_URL)?
            .set_default("murf.audio_format", DEFAULT_AUDIO_FORMAT)?
            .set_default("output.directory", "outputs")?
            .set_default("playback.enabled", false)?
            .set_default("http.timeout_secs", 120_i64)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    /// Overrides the provider keys from `GROQ_API_KEY` / `MURF_API_KEY` when set.
    pub fn apply_api_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(GROQ_API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.groq.api_key = key;
        }
        if let Some(key) = lookup(MURF_API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.murf.api_key = key;
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.groq.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey(GROQ_API_KEY_VAR));
        }
        if self.murf.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey(MURF_API_KEY_VAR));
        }
        Ok(())
    }
}
