use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::RunId;

/// Per-run output directory holding the report, audio and flowchart.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Creates the run directory and returns its path.
    async fn prepare(&self, run_id: RunId) -> Result<PathBuf, ArtifactStoreError>;

    async fn write_report(&self, run_id: RunId, advice: &str)
    -> Result<PathBuf, ArtifactStoreError>;

    async fn write_flowchart(
        &self,
        run_id: RunId,
        segments: &[String],
    ) -> Result<PathBuf, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactStoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
