use whatlang::Lang;

use crate::application::ports::LanguageDetector;

/// Offline trigram-based detection via `whatlang`, reported as ISO 639-1.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let info = whatlang::detect(text)?;
        let code = iso_639_1(info.lang());

        tracing::debug!(
            lang = info.lang().code(),
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "Language detected"
        );

        code.map(String::from)
    }
}

fn iso_639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Cmn => "zh",
        Lang::Nld => "nl",
        Lang::Hin => "hi",
        Lang::Kor => "ko",
        Lang::Tam => "ta",
        Lang::Pol => "pl",
        Lang::Ben => "bn",
        Lang::Jpn => "ja",
        Lang::Ell => "el",
        Lang::Ron => "ro",
        Lang::Slk => "sk",
        Lang::Hrv => "hr",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Tur => "tr",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Hun => "hu",
        Lang::Ces => "cs",
        Lang::Bul => "bg",
        Lang::Slv => "sl",
        Lang::Srp => "sr",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Urd => "ur",
        Lang::Ind => "id",
        Lang::Cat => "ca",
        _ => return None,
    };
    Some(code)
}
