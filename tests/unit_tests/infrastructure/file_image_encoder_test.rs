use sanjeevani::application::ports::{ImageEncoder, ImageEncodingError};
use sanjeevani::infrastructure::image::{FileImageEncoder, sniff_mime_type};

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
const JPEG_HEADER: &[u8] = b"\xff\xd8\xff\xe0\x00\x10JFIF\x00";
const GIF_HEADER: &[u8] = b"GIF89a\x01\x00\x01\x00";

#[test]
fn given_known_headers_when_sniffing_then_returns_matching_mime() {
    assert_eq!(sniff_mime_type(PNG_HEADER), "image/png");
    assert_eq!(sniff_mime_type(JPEG_HEADER), "image/jpeg");
    assert_eq!(sniff_mime_type(GIF_HEADER), "image/gif");
}

#[test]
fn given_unknown_bytes_when_sniffing_then_falls_back_to_jpeg() {
    assert_eq!(sniff_mime_type(b"plain text, not an image"), "image/jpeg");
    assert_eq!(sniff_mime_type(b""), "image/jpeg");
}

#[tokio::test]
async fn given_png_file_when_encoding_then_returns_standard_base64_and_png_mime() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("rash.png");
    std::fs::write(&path, PNG_HEADER).unwrap();

    let encoded = FileImageEncoder::new().encode(&path).await.unwrap();

    assert_eq!(encoded.mime_type, "image/png");
    assert_eq!(encoded.base64, "iVBORw0KGgoAAAANSUhEUg==");
    assert_eq!(
        encoded.data_uri(),
        "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg=="
    );
}

#[tokio::test]
async fn given_missing_file_when_encoding_then_returns_io_error_with_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.jpg");

    let result = FileImageEncoder::new().encode(&path).await;

    match result {
        Err(ImageEncodingError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}
