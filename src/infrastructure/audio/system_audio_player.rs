use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioPlayer, PlaybackError};

/// Program and arguments that play `path` on the given OS (`std::env::consts::OS` value).
pub fn playback_command(os: &str, path: &Path) -> (String, Vec<String>) {
    let file = path.display().to_string();
    match os {
        "macos" => ("afplay".to_string(), vec![file]),
        "windows" => (
            "powershell".to_string(),
            vec![
                "-c".to_string(),
                format!(
                    "(New-Object Media.SoundPlayer '{}').PlaySync()",
                    file.replace('\'', "''")
                ),
            ],
        ),
        _ => ("aplay".to_string(), vec![file]),
    }
}

/// Plays audio through the platform's command-line player.
pub struct SystemAudioPlayer {
    os: String,
}

impl SystemAudioPlayer {
    pub fn new() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
        }
    }
}

impl Default for SystemAudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioPlayer for SystemAudioPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let (program, args) = playback_command(&self.os, path);

        tracing::debug!(command = %program, path = %path.display(), "Starting local playback");

        let status = Command::new(&program)
            .args(&args)
            .status()
            .await
            .map_err(|source| PlaybackError::Launch {
                command: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(PlaybackError::ExitStatus {
                command: program,
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Used when playback is disabled, e.g. on a headless server.
pub struct NoopAudioPlayer;

#[async_trait]
impl AudioPlayer for NoopAudioPlayer {
    async fn play(&self, _path: &Path) -> Result<(), PlaybackError> {
        Ok(())
    }
}
