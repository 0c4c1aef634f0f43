//! Gemini generateContent provider

use crate::provider::{ChatModel, ModelError, ModelResult};
use crate::types::ModelReply;
use agentgate_core::types::Turn;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiModel {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Turn],
}

#[async_trait::async_trait]
impl ChatModel for GeminiModel {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn send_message(&self, model: &str, history: &[Turn]) -> ModelResult<ModelReply> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest { contents: history };

        debug!("Gemini request: model={}, turns={}", model, history.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini error {}: {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => ModelError::AuthFailed(error_text),
                429 => ModelError::RateLimited,
                _ => ModelError::RequestFailed(format!("{}: {}", status, error_text)),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))
    }
}
