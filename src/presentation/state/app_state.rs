use std::sync::Arc;

use crate::application::services::DiagnosisPipeline;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DiagnosisPipeline>,
    pub settings: Settings,
}
