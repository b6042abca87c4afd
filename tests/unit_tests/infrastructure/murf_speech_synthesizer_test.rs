use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use sanjeevani::application::ports::{AudioPlayer, PlaybackError, SpeechSynthesizer, SynthesisError};
use sanjeevani::infrastructure::murf::MurfSpeechSynthesizer;

use crate::mock_server::start_mock_server;

const WAV_BYTES: &[u8] = b"RIFF\x10\x00\x00\x00WAVEfmt data";

#[derive(Clone, Default)]
struct MockMurf {
    generate_body: Arc<Mutex<Value>>,
    request: Arc<Mutex<Option<(Option<String>, Value)>>>,
}

fn murf_app(murf: MockMurf) -> Router {
    Router::new()
        .route(
            "/v1/speech/generate",
            post(
                |State(murf): State<MockMurf>, headers: HeaderMap, Json(request): Json<Value>| async move {
                    let api_key = headers
                        .get("api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    *murf.request.lock().unwrap() = Some((api_key, request));
                    let body = murf.generate_body.lock().unwrap().clone();
                    Json(body)
                },
            ),
        )
        .route("/files/speech.wav", get(|| async { WAV_BYTES }))
        .route(
            "/files/expired.wav",
            get(|| async { (StatusCode::NOT_FOUND, "gone").into_response() }),
        )
        .with_state(murf)
}

#[derive(Default)]
struct RecordingPlayer {
    played: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl AudioPlayer for RecordingPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        self.played.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

struct BrokenPlayer;

#[async_trait]
impl AudioPlayer for BrokenPlayer {
    async fn play(&self, _path: &Path) -> Result<(), PlaybackError> {
        Err(PlaybackError::Launch {
            command: "aplay".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        })
    }
}

fn synthesizer(base_url: &str, player: Arc<dyn AudioPlayer>) -> MurfSpeechSynthesizer {
    MurfSpeechSynthesizer::new(
        reqwest::Client::new(),
        "murf-test-key".to_string(),
        base_url.to_string(),
        "WAV".to_string(),
        player,
    )
}

#[tokio::test]
async fn given_audio_file_url_when_synthesizing_then_downloads_bytes_and_plays() {
    let murf = MockMurf::default();
    let (base_url, shutdown_tx) = start_mock_server(murf_app(murf.clone())).await;
    *murf.generate_body.lock().unwrap() =
        json!({ "audioFile": format!("{}/files/speech.wav", base_url), "audioLengthInSeconds": 3.2 });
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("doctor_response_en-US.wav");
    let player = Arc::new(RecordingPlayer::default());

    synthesizer(&base_url, player.clone())
        .synthesize("Rest and drink fluids.", "en-US-natalie", &output)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), WAV_BYTES);
    assert_eq!(*player.played.lock().unwrap(), vec![output.clone()]);
    let (api_key, request) = murf.request.lock().unwrap().clone().unwrap();
    assert_eq!(api_key.as_deref(), Some("murf-test-key"));
    assert_eq!(
        request,
        json!({ "text": "Rest and drink fluids.", "voiceId": "en-US-natalie", "format": "WAV" })
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_audio_url_alias_when_synthesizing_then_downloads_bytes() {
    let murf = MockMurf::default();
    let (base_url, shutdown_tx) = start_mock_server(murf_app(murf.clone())).await;
    *murf.generate_body.lock().unwrap() =
        json!({ "audio_url": format!("{}/files/speech.wav", base_url) });
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("speech.wav");

    synthesizer(&base_url, Arc::new(RecordingPlayer::default()))
        .synthesize("Rest.", "fr-FR-axel", &output)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), WAV_BYTES);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_audio_url_when_synthesizing_then_returns_missing_audio_url() {
    let murf = MockMurf::default();
    let (base_url, shutdown_tx) = start_mock_server(murf_app(murf.clone())).await;
    *murf.generate_body.lock().unwrap() = json!({ "audioLengthInSeconds": 0 });
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("speech.wav");

    let result = synthesizer(&base_url, Arc::new(RecordingPlayer::default()))
        .synthesize("Rest.", "en-US-natalie", &output)
        .await;

    assert!(matches!(result, Err(SynthesisError::MissingAudioUrl)));
    assert!(!output.exists());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_expired_audio_url_when_synthesizing_then_returns_download_failed() {
    let murf = MockMurf::default();
    let (base_url, shutdown_tx) = start_mock_server(murf_app(murf.clone())).await;
    *murf.generate_body.lock().unwrap() =
        json!({ "audioFile": format!("{}/files/expired.wav", base_url) });
    let dir = tempfile::TempDir::new().unwrap();

    let result = synthesizer(&base_url, Arc::new(RecordingPlayer::default()))
        .synthesize("Rest.", "en-US-natalie", &dir.path().join("speech.wav"))
        .await;

    assert!(matches!(result, Err(SynthesisError::DownloadFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_playback_failure_when_synthesizing_then_still_succeeds() {
    let murf = MockMurf::default();
    let (base_url, shutdown_tx) = start_mock_server(murf_app(murf.clone())).await;
    *murf.generate_body.lock().unwrap() =
        json!({ "audioFile": format!("{}/files/speech.wav", base_url) });
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("speech.wav");

    let result = synthesizer(&base_url, Arc::new(BrokenPlayer))
        .synthesize("Rest.", "en-US-natalie", &output)
        .await;

    assert!(result.is_ok());
    assert!(output.exists());
    shutdown_tx.send(()).ok();
}
