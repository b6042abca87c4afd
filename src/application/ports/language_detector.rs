/// Local, synchronous language identification of transcript text.
pub trait LanguageDetector: Send + Sync {
    /// Two-letter language code, or `None` when the text gives no usable signal.
    fn detect(&self, text: &str) -> Option<String>;
}
