use std::collections::HashMap;

use super::locale::LocaleCode;

const DEFAULT_VOICE_LOCALE: &str = "en-US";
const DEFAULT_VOICE_ID: &str = "en-US-natalie";

const STANDARD_VOICES: &[(&str, &str, &str)] = &[
    ("en-US", "en-US", "en-US-natalie"),
    ("en-IN", "en-IN", "en-IN-isha"),
    ("en-UK", "en-UK", "en-UK-theo"),
    ("fr-FR", "fr-FR", "fr-FR-axel"),
    ("de-DE", "de-DE", "de-DE-lia"),
    ("es-ES", "es-ES", "es-ES-carmen"),
    ("it-IT", "it-IT", "it-IT-lorenzo"),
    ("pt-BR", "pt-BR", "pt-BR-isadora"),
    ("zh-CN", "zh-CN", "zh-CN-tao"),
    ("hi-IN", "hi-IN", "hi-IN-shweta"),
    ("ko-KR", "ko-KR", "ko-KR-hwan"),
    ("ta-IN", "ta-IN", "ta-IN-iniya"),
    ("pl-PL", "pl-PL", "pl-PL-jacek"),
    ("bn-IN", "bn-IN", "bn-IN-ishani"),
    ("ja-JP", "ja-JP", "ja-JP-kenji"),
    ("nl-NL", "nl-NL", "nl-NL-dirk"),
    ("hr-HR", "hr-HR", "hr-HR-marija"),
    ("el-GR", "el-GR", "en-US-ken"),
    ("ro-RO", "ro-RO", "en-US-riley"),
    ("sk-SK", "sk-SK", "sk-SK-nina"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub locale: String,
    pub voice_id: String,
}

impl Voice {
    pub fn new(locale: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            voice_id: voice_id.into(),
        }
    }
}

/// Maps an output locale to the synthesis voice speaking it.
#[derive(Debug, Clone)]
pub struct VoiceSelection {
    voices: HashMap<String, Voice>,
    default_voice: Voice,
}

impl VoiceSelection {
    pub fn new(voices: HashMap<String, Voice>, default_voice: Voice) -> Self {
        Self {
            voices,
            default_voice,
        }
    }

    pub fn resolve(&self, locale: &LocaleCode) -> &Voice {
        self.voices
            .get(locale.as_str())
            .unwrap_or(&self.default_voice)
    }
}

impl Default for VoiceSelection {
    fn default() -> Self {
        let voices = STANDARD_VOICES
            .iter()
            .map(|(code, locale, voice_id)| ((*code).to_string(), Voice::new(*locale, *voice_id)))
            .collect();
        Self::new(voices, Voice::new(DEFAULT_VOICE_LOCALE, DEFAULT_VOICE_ID))
    }
}
