mod murf_speech_synthesizer;
mod murf_translator;

pub use murf_speech_synthesizer::{DEFAULT_AUDIO_FORMAT, MurfSpeechSynthesizer};
pub use murf_translator::{DEFAULT_MURF_BASE_URL, MurfTranslator};
