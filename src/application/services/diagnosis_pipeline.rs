use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, ImageEncoder, ImageEncodingError, LlmClient,
    LlmClientError, SpeechSynthesizer, SynthesisError, TranslationError, Translator,
};
use crate::domain::{
    AdviceText, BASELINE_LANGUAGE, DiagnosisPrompt, IMAGE_ONLY_TRANSCRIPT, InputBundle,
    OutputArtifact, RunId, Transcript, TranscriptSource, VoiceSelection, audio_file_name,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::transcription_service::{TranscriptionService, TranscriptionServiceError};

/// Runs one submission end to end: transcript, inference, translation, speech, report.
pub struct DiagnosisPipeline {
    transcription: Arc<TranscriptionService>,
    image_encoder: Arc<dyn ImageEncoder>,
    llm_client: Arc<dyn LlmClient>,
    translator: Arc<dyn Translator>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    artifact_store: Arc<dyn ArtifactStore>,
    voices: VoiceSelection,
}

impl DiagnosisPipeline {
    pub fn new(
        transcription: Arc<TranscriptionService>,
        image_encoder: Arc<dyn ImageEncoder>,
        llm_client: Arc<dyn LlmClient>,
        translator: Arc<dyn Translator>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
        artifact_store: Arc<dyn ArtifactStore>,
        voices: VoiceSelection,
    ) -> Self {
        Self {
            transcription,
            image_encoder,
            llm_client,
            translator,
            speech_synthesizer,
            artifact_store,
            voices,
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(run_id = %run_id, locale = %input.output_locale)
    )]
    pub async fn run(
        &self,
        run_id: RunId,
        input: &InputBundle,
    ) -> Result<OutputArtifact, PipelineError> {
        let source = input.transcript_source().ok_or(PipelineError::EmptyInput)?;
        let transcript = self.resolve_transcript(source).await?;
        let transcript_text = transcript.as_ref().map(|t| t.text.as_str()).unwrap_or("");

        let prompt = DiagnosisPrompt::build(transcript_text, input.image.is_some());
        tracing::debug!(
            template = prompt.template.as_str(),
            prompt = %sanitize_prompt(&prompt.instruction),
            "Prompt selected"
        );

        let image = match &input.image {
            Some(path) => Some(self.image_encoder.encode(path).await?),
            None => None,
        };

        let raw = self
            .llm_client
            .complete(&prompt.instruction, image.as_ref())
            .await?;
        let mut advice = AdviceText::new(raw);
        tracing::info!(advice = %sanitize_prompt(advice.as_str()), "Diagnosis received");

        let source_language = transcript
            .as_ref()
            .map(|t| t.language.as_str())
            .unwrap_or(BASELINE_LANGUAGE);
        if input.output_locale.requires_translation_from(source_language) {
            tracing::debug!(
                from = source_language,
                to = %input.output_locale,
                "Translating diagnosis"
            );
            let translated = self
                .translator
                .translate(advice.as_str(), &input.output_locale)
                .await?;
            advice = AdviceText::new(translated);
        }

        let voice = self.voices.resolve(&input.output_locale);

        let run_dir = self.artifact_store.prepare(run_id).await?;
        let audio_path = run_dir.join(audio_file_name(&input.output_locale));
        self.speech_synthesizer
            .synthesize(advice.as_str(), &voice.voice_id, &audio_path)
            .await?;

        let report_path = self
            .artifact_store
            .write_report(run_id, advice.as_str())
            .await?;
        let flowchart_path = self
            .artifact_store
            .write_flowchart(run_id, &advice.segments())
            .await?;

        tracing::info!(
            audio = %audio_path.display(),
            report = %report_path.display(),
            voice = %voice.voice_id,
            "Diagnosis run completed"
        );

        let transcript = transcript
            .filter(|t| !t.is_empty())
            .map(|t| t.text)
            .unwrap_or_else(|| IMAGE_ONLY_TRANSCRIPT.to_string());

        Ok(OutputArtifact {
            run_id,
            transcript,
            advice: advice.into_inner(),
            audio_path,
            report_path,
            flowchart_path,
        })
    }

    async fn resolve_transcript(
        &self,
        source: TranscriptSource<'_>,
    ) -> Result<Option<Transcript>, PipelineError> {
        match source {
            TranscriptSource::TextFile(path) => {
                let text = read_text_file(path).await?;
                Ok(Some(Transcript::new(text, BASELINE_LANGUAGE)))
            }
            TranscriptSource::Audio(path) => {
                Ok(Some(self.transcription.transcribe_file(path).await?))
            }
            TranscriptSource::ImageOnly => Ok(None),
        }
    }
}

async fn read_text_file(path: &Path) -> Result<String, PipelineError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PipelineError::InputRead {
            path: path.to_path_buf(),
            source,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no audio, text or image input supplied")]
    EmptyInput,
    #[error("failed to read input {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionServiceError),
    #[error("image encoding: {0}")]
    ImageEncoding(#[from] ImageEncodingError),
    #[error("inference: {0}")]
    Inference(#[from] LlmClientError),
    #[error("translation: {0}")]
    Translation(#[from] TranslationError),
    #[error("speech synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("artifact storage: {0}")]
    Artifacts(#[from] ArtifactStoreError),
}
