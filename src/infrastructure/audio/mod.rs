mod groq_whisper_engine;
mod system_audio_player;

pub use groq_whisper_engine::{DEFAULT_GROQ_BASE_URL, DEFAULT_TRANSCRIPTION_MODEL, GroqWhisperEngine};
pub use system_audio_player::{NoopAudioPlayer, SystemAudioPlayer, playback_command};
