mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{
    GROQ_API_KEY_VAR, GroqSettings, HttpSettings, MURF_API_KEY_VAR, MurfSettings, OutputSettings,
    PlaybackSettings, ServerSettings, Settings, SettingsError,
};
