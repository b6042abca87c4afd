use std::fmt;

/// Source language assumed when no transcript is available to detect from.
pub const BASELINE_LANGUAGE: &str = "en";

/// Language-region identifier such as `fr-FR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn parse(code: &str) -> Result<Self, String> {
        let code = code.trim();
        if code.is_empty() {
            return Err("Locale code must not be empty".to_string());
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("Invalid locale code: {}", code));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter language prefix, e.g. `fr` for `fr-FR`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Whether advice produced in `source_language` must be translated to reach this locale.
    pub fn requires_translation_from(&self, source_language: &str) -> bool {
        !self.language().eq_ignore_ascii_case(source_language)
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
