use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use sanjeevani::application::services::{DiagnosisPipeline, TranscriptionService};
use sanjeevani::domain::{InputBundle, RunId, VoiceSelection, resolve_language_choice};
use sanjeevani::infrastructure::audio::{GroqWhisperEngine, NoopAudioPlayer};
use sanjeevani::infrastructure::image::FileImageEncoder;
use sanjeevani::infrastructure::language::WhatlangDetector;
use sanjeevani::infrastructure::llm::GroqChatClient;
use sanjeevani::infrastructure::murf::{MurfSpeechSynthesizer, MurfTranslator};
use sanjeevani::infrastructure::storage::LocalArtifactStore;

use crate::mock_server::start_mock_server;

const SYMPTOMS: &str = "I have a sore throat and mild fever.";
const ADVICE: &str =
    "You likely have a mild viral throat infection. Rest, drink warm fluids and take paracetamol.";
const FRENCH_ADVICE: &str =
    "Vous avez probablement une légère infection virale de la gorge. Reposez-vous et buvez chaud.";
const WAV_BYTES: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00";

#[derive(Clone, Default)]
struct Upstream {
    base_url: Arc<OnceLock<String>>,
    spoken: Arc<Mutex<String>>,
    chat_prompts: Arc<Mutex<Vec<String>>>,
    translations: Arc<AtomicUsize>,
    spoken_texts: Arc<Mutex<Vec<(String, String)>>>,
}

async fn transcriptions(State(upstream): State<Upstream>) -> Json<Value> {
    let text = upstream.spoken.lock().unwrap().clone();
    Json(json!({ "text": text }))
}

async fn chat_completions(
    State(upstream): State<Upstream>,
    Json(request): Json<Value>,
) -> Json<Value> {
    let prompt = request["messages"][0]["content"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    upstream.chat_prompts.lock().unwrap().push(prompt);
    Json(json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": ADVICE } }]
    }))
}

async fn translate(State(upstream): State<Upstream>, Json(request): Json<Value>) -> Json<Value> {
    upstream.translations.fetch_add(1, Ordering::SeqCst);
    assert_eq!(request["targetLanguage"], "fr-FR");
    Json(json!({ "translations": [{ "source_text": ADVICE, "translated_text": FRENCH_ADVICE }] }))
}

async fn generate_speech(
    State(upstream): State<Upstream>,
    Json(request): Json<Value>,
) -> Json<Value> {
    upstream.spoken_texts.lock().unwrap().push((
        request["text"].as_str().unwrap_or_default().to_string(),
        request["voiceId"].as_str().unwrap_or_default().to_string(),
    ));
    let base_url = upstream.base_url.get().cloned().unwrap_or_default();
    Json(json!({ "audioFile": format!("{}/files/response.wav", base_url), "encodedAudio": null }))
}

fn upstream_app(upstream: Upstream) -> Router {
    Router::new()
        .route("/openai/v1/audio/transcriptions", post(transcriptions))
        .route("/openai/v1/chat/completions", post(chat_completions))
        .route("/v1/text/translate", post(translate))
        .route("/v1/speech/generate", post(generate_speech))
        .route("/files/response.wav", get(|| async { WAV_BYTES }))
        .with_state(upstream)
}

fn pipeline(base_url: &str, output_dir: &std::path::Path) -> DiagnosisPipeline {
    let client = reqwest::Client::new();
    let groq_url = format!("{}/openai/v1", base_url);

    let transcription = Arc::new(TranscriptionService::new(
        Arc::new(GroqWhisperEngine::new(
            client.clone(),
            "gsk_test".to_string(),
            Some(groq_url.clone()),
            None,
        )),
        Arc::new(WhatlangDetector::new()),
    ));

    DiagnosisPipeline::new(
        transcription,
        Arc::new(FileImageEncoder::new()),
        Arc::new(GroqChatClient::new(
            client.clone(),
            "gsk_test".to_string(),
            groq_url,
            "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
        )),
        Arc::new(MurfTranslator::new(
            client.clone(),
            "murf_test".to_string(),
            base_url.to_string(),
        )),
        Arc::new(MurfSpeechSynthesizer::new(
            client,
            "murf_test".to_string(),
            base_url.to_string(),
            "WAV".to_string(),
            Arc::new(NoopAudioPlayer),
        )),
        Arc::new(LocalArtifactStore::new(output_dir.to_path_buf()).unwrap()),
        VoiceSelection::default(),
    )
}

async fn start_upstream() -> (Upstream, String, tokio::sync::oneshot::Sender<()>) {
    let upstream = Upstream::default();
    let (base_url, shutdown_tx) = start_mock_server(upstream_app(upstream.clone())).await;
    upstream.base_url.set(base_url.clone()).unwrap();
    (upstream, base_url, shutdown_tx)
}

#[tokio::test]
async fn given_english_symptom_file_and_english_target_when_diagnosing_then_no_translation() {
    let (upstream, base_url, shutdown_tx) = start_upstream().await;
    let dir = tempfile::TempDir::new().unwrap();
    let text_file = dir.path().join("symptoms.txt");
    std::fs::write(&text_file, SYMPTOMS).unwrap();
    let locale = resolve_language_choice("English").unwrap();

    let artifact = pipeline(&base_url, &dir.path().join("outputs"))
        .run(RunId::new(), &InputBundle::new(locale).with_text_file(text_file))
        .await
        .unwrap();

    assert!(!artifact.advice.is_empty());
    assert_eq!(artifact.advice, ADVICE);
    assert_eq!(upstream.translations.load(Ordering::SeqCst), 0);
    assert!(artifact.audio_path.ends_with("doctor_response_en-US.wav"));
    assert_eq!(std::fs::read(&artifact.audio_path).unwrap(), WAV_BYTES);
    assert_eq!(std::fs::read_to_string(&artifact.report_path).unwrap(), ADVICE);
    assert!(upstream.chat_prompts.lock().unwrap()[0].ends_with(SYMPTOMS));
    assert_eq!(
        upstream.spoken_texts.lock().unwrap()[0],
        (ADVICE.to_string(), "en-US-natalie".to_string())
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_english_symptom_file_and_french_target_when_diagnosing_then_translated() {
    let (upstream, base_url, shutdown_tx) = start_upstream().await;
    let dir = tempfile::TempDir::new().unwrap();
    let text_file = dir.path().join("symptoms.txt");
    std::fs::write(&text_file, SYMPTOMS).unwrap();
    let locale = resolve_language_choice("French").unwrap();

    let artifact = pipeline(&base_url, &dir.path().join("outputs"))
        .run(RunId::new(), &InputBundle::new(locale).with_text_file(text_file))
        .await
        .unwrap();

    assert_eq!(upstream.translations.load(Ordering::SeqCst), 1);
    assert_eq!(artifact.advice, FRENCH_ADVICE);
    assert!(artifact.audio_path.ends_with("doctor_response_fr-FR.wav"));
    assert_eq!(
        std::fs::read_to_string(&artifact.report_path).unwrap(),
        FRENCH_ADVICE
    );
    assert_eq!(
        upstream.spoken_texts.lock().unwrap()[0],
        (FRENCH_ADVICE.to_string(), "fr-FR-axel".to_string())
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_french_recording_and_french_target_when_diagnosing_then_no_translation() {
    let (upstream, base_url, shutdown_tx) = start_upstream().await;
    *upstream.spoken.lock().unwrap() =
        "J'ai mal à la gorge et un peu de fièvre depuis hier soir, et je me sens très fatigué."
            .to_string();
    let dir = tempfile::TempDir::new().unwrap();
    let audio = dir.path().join("recording.wav");
    std::fs::write(&audio, b"fake wav").unwrap();
    let locale = resolve_language_choice("fr-FR").unwrap();

    let artifact = pipeline(&base_url, &dir.path().join("outputs"))
        .run(RunId::new(), &InputBundle::new(locale).with_audio(audio))
        .await
        .unwrap();

    assert_eq!(upstream.translations.load(Ordering::SeqCst), 0);
    assert!(artifact.transcript.starts_with("J'ai mal à la gorge"));
    assert!(artifact.audio_path.ends_with("doctor_response_fr-FR.wav"));
    shutdown_tx.send(()).ok();
}
