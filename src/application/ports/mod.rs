mod artifact_store;
mod audio_player;
mod image_encoder;
mod language_detector;
mod llm_client;
mod speech_synthesizer;
mod transcription_engine;
mod translator;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use audio_player::{AudioPlayer, PlaybackError};
pub use image_encoder::{ImageEncoder, ImageEncodingError};
pub use language_detector::LanguageDetector;
pub use llm_client::{LlmClient, LlmClientError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{TranslationError, Translator};
