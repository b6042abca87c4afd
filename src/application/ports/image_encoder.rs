use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::EncodedImage;

#[async_trait]
pub trait ImageEncoder: Send + Sync {
    async fn encode(&self, path: &Path) -> Result<EncodedImage, ImageEncodingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageEncodingError {
    #[error("failed to read image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
