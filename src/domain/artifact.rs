use std::path::PathBuf;

use super::locale::LocaleCode;
use super::run_id::RunId;

pub const REPORT_FILE_NAME: &str = "doctor_advice.txt";
pub const FLOWCHART_FILE_NAME: &str = "flowchart.svg";
pub const IMAGE_ONLY_TRANSCRIPT: &str = "Image-only analysis";

pub fn audio_file_name(locale: &LocaleCode) -> String {
    format!("doctor_response_{}.wav", locale.as_str())
}

/// Everything one pipeline run hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputArtifact {
    pub run_id: RunId,
    pub transcript: String,
    pub advice: String,
    pub audio_path: PathBuf,
    pub report_path: PathBuf,
    pub flowchart_path: PathBuf,
}
