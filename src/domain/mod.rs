mod advice;
mod artifact;
mod encoded_image;
mod input_bundle;
mod language_choice;
mod locale;
mod prompt;
mod run_id;
mod transcript;
mod voice;

pub use advice::AdviceText;
pub use artifact::{
    FLOWCHART_FILE_NAME, IMAGE_ONLY_TRANSCRIPT, OutputArtifact, REPORT_FILE_NAME, audio_file_name,
};
pub use encoded_image::{EncodedImage, FALLBACK_IMAGE_MIME};
pub use input_bundle::{InputBundle, TranscriptSource};
pub use language_choice::{DEFAULT_LANGUAGE_LABEL, LANGUAGE_CHOICES, resolve_language_choice};
pub use locale::{BASELINE_LANGUAGE, LocaleCode};
pub use prompt::{DiagnosisPrompt, PromptTemplate};
pub use run_id::RunId;
pub use transcript::Transcript;
pub use voice::{Voice, VoiceSelection};
