use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::{FLOWCHART_FILE_NAME, REPORT_FILE_NAME, RunId};

use super::flowchart_svg::render_flowchart_svg;

/// Writes each run's artifacts under `<base_dir>/<run_id>/`.
pub struct LocalArtifactStore {
    base_dir: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_dir: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_dir).map_err(|e| ArtifactStoreError::io(&base_dir, e))?;
        Ok(Self { base_dir })
    }

    pub fn run_dir(&self, run_id: RunId) -> PathBuf {
        self.base_dir.join(run_id.to_string())
    }

    async fn write(&self, run_id: RunId, file_name: &str, contents: &[u8]) -> Result<PathBuf, ArtifactStoreError> {
        let path = self.run_dir(run_id).join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| ArtifactStoreError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Artifact written");
        Ok(path)
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn prepare(&self, run_id: RunId) -> Result<PathBuf, ArtifactStoreError> {
        let dir = self.run_dir(run_id);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ArtifactStoreError::io(&dir, e))?;
        Ok(dir)
    }

    async fn write_report(
        &self,
        run_id: RunId,
        advice: &str,
    ) -> Result<PathBuf, ArtifactStoreError> {
        self.write(run_id, REPORT_FILE_NAME, advice.trim().as_bytes())
            .await
    }

    async fn write_flowchart(
        &self,
        run_id: RunId,
        segments: &[String],
    ) -> Result<PathBuf, ArtifactStoreError> {
        let svg = render_flowchart_svg(segments);
        self.write(run_id, FLOWCHART_FILE_NAME, svg.as_bytes()).await
    }
}
