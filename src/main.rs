use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use sanjeevani::application::ports::AudioPlayer;
use sanjeevani::application::services::{DiagnosisPipeline, TranscriptionService};
use sanjeevani::domain::VoiceSelection;
use sanjeevani::infrastructure::audio::{GroqWhisperEngine, NoopAudioPlayer, SystemAudioPlayer};
use sanjeevani::infrastructure::image::FileImageEncoder;
use sanjeevani::infrastructure::language::WhatlangDetector;
use sanjeevani::infrastructure::llm::GroqChatClient;
use sanjeevani::infrastructure::murf::{MurfSpeechSynthesizer, MurfTranslator};
use sanjeevani::infrastructure::observability::{TracingConfig, init_tracing};
use sanjeevani::infrastructure::storage::LocalArtifactStore;
use sanjeevani::presentation::{AppState, Settings, create_router};

fn build_pipeline(settings: &Settings) -> anyhow::Result<DiagnosisPipeline> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.http.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let transcription = Arc::new(TranscriptionService::new(
        Arc::new(GroqWhisperEngine::new(
            http_client.clone(),
            settings.groq.api_key.clone(),
            Some(settings.groq.base_url.clone()),
            Some(settings.groq.transcription_model.clone()),
        )),
        Arc::new(WhatlangDetector::new()),
    ));

    let llm_client = Arc::new(GroqChatClient::new(
        http_client.clone(),
        settings.groq.api_key.clone(),
        settings.groq.base_url.clone(),
        settings.groq.chat_model.clone(),
    ));

    let translator = Arc::new(MurfTranslator::new(
        http_client.clone(),
        settings.murf.api_key.clone(),
        settings.murf.base_url.clone(),
    ));

    let player: Arc<dyn AudioPlayer> = if settings.playback.enabled {
        Arc::new(SystemAudioPlayer::new())
    } else {
        Arc::new(NoopAudioPlayer)
    };

    let speech_synthesizer = Arc::new(MurfSpeechSynthesizer::new(
        http_client,
        settings.murf.api_key.clone(),
        settings.murf.base_url.clone(),
        settings.murf.audio_format.clone(),
        player,
    ));

    let artifact_store = Arc::new(
        LocalArtifactStore::new(settings.output.directory.clone())
            .context("Failed to prepare output directory")?,
    );

    Ok(DiagnosisPipeline::new(
        transcription,
        Arc::new(FileImageEncoder::new()),
        llm_client,
        translator,
        speech_synthesizer,
        artifact_store,
        VoiceSelection::default(),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::default()).context("Failed to initialize tracing")?;

    let settings = Settings::load().context("Failed to load configuration")?;

    let pipeline = Arc::new(build_pipeline(&settings)?);

    tracing::info!(
        output_dir = %settings.output.directory.display(),
        chat_model = %settings.groq.chat_model,
        transcription_model = %settings.groq.transcription_model,
        playback = settings.playback.enabled,
        "Diagnosis pipeline ready"
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        pipeline,
        settings,
    };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
