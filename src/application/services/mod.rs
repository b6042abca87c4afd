mod diagnosis_pipeline;
mod transcription_service;

pub use diagnosis_pipeline::{DiagnosisPipeline, PipelineError};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
