mod diagnose;
mod health;
mod index;
mod languages;

pub use diagnose::{DiagnoseResponse, ErrorResponse, diagnose_handler};
pub use health::health_handler;
pub use index::{index_handler, render_index_page};
pub use languages::languages_handler;
