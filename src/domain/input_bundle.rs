use std::path::{Path, PathBuf};

use super::locale::LocaleCode;

/// Files submitted for one diagnosis plus the language the answer should be in.
#[derive(Debug, Clone, Default)]
pub struct InputBundle {
    pub audio: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub text_file: Option<PathBuf>,
    pub output_locale: LocaleCode,
}

/// Where the transcript for a run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptSource<'a> {
    TextFile(&'a Path),
    Audio(&'a Path),
    ImageOnly,
}

impl InputBundle {
    pub fn new(output_locale: LocaleCode) -> Self {
        Self {
            output_locale,
            ..Self::default()
        }
    }

    pub fn with_audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = Some(path.into());
        self
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn with_text_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.text_file = Some(path.into());
        self
    }

    /// Text file wins over audio; `None` when nothing was submitted at all.
    pub fn transcript_source(&self) -> Option<TranscriptSource<'_>> {
        if let Some(path) = &self.text_file {
            return Some(TranscriptSource::TextFile(path));
        }
        if let Some(path) = &self.audio {
            return Some(TranscriptSource::Audio(path));
        }
        self.image.as_ref().map(|_| TranscriptSource::ImageOnly)
    }
}
