use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LocaleCode;

pub const DEFAULT_MURF_BASE_URL: &str = "https://api.murf.ai";

pub struct MurfTranslator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl MurfTranslator {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    target_language: &'a str,
    texts: [&'a str; 1],
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(default)]
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for MurfTranslator {
    #[tracing::instrument(skip_all, fields(locale = %target))]
    async fn translate(&self, text: &str, target: &LocaleCode) -> Result<String, TranslationError> {
        let request_body = TranslateRequest {
            target_language: target.as_str(),
            texts: [text],
        };

        let response = self
            .client
            .post(format!("{}/v1/text/translate", self.base_url))
            .header("api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let result: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        let translated = result
            .translations
            .into_iter()
            .next()
            .and_then(|t| t.translated_text)
            .filter(|t| !t.trim().is_empty());

        match translated {
            Some(translated) => Ok(translated),
            None => {
                tracing::warn!(
                    target_language = %target,
                    "Translation response contained no translated text, keeping original"
                );
                Ok(text.to_string())
            }
        }
    }
}
