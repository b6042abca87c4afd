pub mod audio;
pub mod image;
pub mod language;
pub mod llm;
pub mod murf;
pub mod observability;
pub mod storage;
