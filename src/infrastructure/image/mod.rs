mod file_image_encoder;

pub use file_image_encoder::{FileImageEncoder, sniff_mime_type};
