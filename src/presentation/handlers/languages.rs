use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{DEFAULT_LANGUAGE_LABEL, LANGUAGE_CHOICES};

#[derive(Serialize)]
pub struct LanguageOption {
    pub label: &'static str,
    pub locale: &'static str,
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub default: &'static str,
    pub languages: Vec<LanguageOption>,
}

pub async fn languages_handler() -> impl IntoResponse {
    Json(LanguagesResponse {
        default: DEFAULT_LANGUAGE_LABEL,
        languages: LANGUAGE_CHOICES
            .iter()
            .map(|&(label, locale)| LanguageOption { label, locale })
            .collect(),
    })
}
