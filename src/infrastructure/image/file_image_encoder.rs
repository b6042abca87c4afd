use std::path::Path;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::{ImageEncoder, ImageEncodingError};
use crate::domain::{EncodedImage, FALLBACK_IMAGE_MIME};

/// Reads an image file whole and base64-encodes it for a chat data URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageEncoder;

impl FileImageEncoder {
    pub fn new() -> Self {
        Self
    }
}

/// MIME type sniffed from the file header; unknown formats are sent as JPEG.
pub fn sniff_mime_type(bytes: &[u8]) -> &'static str {
    ::image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_IMAGE_MIME)
}

#[async_trait]
impl ImageEncoder for FileImageEncoder {
    async fn encode(&self, path: &Path) -> Result<EncodedImage, ImageEncodingError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ImageEncodingError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mime_type = sniff_mime_type(&bytes);
        tracing::debug!(bytes = bytes.len(), mime = mime_type, "Image encoded");

        Ok(EncodedImage::new(
            mime_type,
            general_purpose::STANDARD.encode(&bytes),
        ))
    }
}
