use std::fmt;

/// Free-text diagnosis returned by the model, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceText(String);

impl AdviceText {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Sentence-like segments split on periods, one per flowchart box.
    pub fn segments(&self) -> Vec<String> {
        self.0
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl fmt::Display for AdviceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
