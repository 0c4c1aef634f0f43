//! Agent client - HTTP calls against the gateway

use agentgate_core::protocol::{
    ChatRequest, ExecuteToolCallRequest, Prompt, RunRequest, API_KEY_HEADER,
};
use agentgate_core::types::{ChatResult, RunResult, Turn};
use agentgate_core::ClientConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("agent server is not configured; set AGENT_SERVER_URL and AGENT_SERVER_API_KEY")]
    ConfigMissing,

    /// Non-success HTTP status; the body is carried verbatim.
    #[error("agent server request failed: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Remote-facing client for the gateway. Construction never fails;
/// calls against a missing configuration fail fast before touching the
/// network.
pub struct AgentClient {
    http: Client,
    config: ClientConfig,
}

impl AgentClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Read `AGENT_SERVER_URL` and `AGENT_SERVER_API_KEY` once.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub async fn chat(
        &self,
        prompt: impl Into<Prompt>,
        history: Option<Vec<Turn>>,
    ) -> ClientResult<ChatResult> {
        self.post(
            "/chat",
            &ChatRequest {
                prompt: Some(prompt.into()),
                history,
            },
        )
        .await
    }

    pub async fn execute_tool_call(
        &self,
        tool_call_id: impl Into<String>,
        tool_response: serde_json::Value,
    ) -> ClientResult<ChatResult> {
        self.post(
            "/execute_tool_call",
            &ExecuteToolCallRequest {
                tool_call_id: Some(tool_call_id.into()),
                tool_response,
            },
        )
        .await
    }

    pub async fn run(&self, prompt: impl Into<Prompt>) -> ClientResult<RunResult> {
        self.post(
            "/run",
            &RunRequest {
                prompt: Some(prompt.into()),
            },
        )
        .await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        let (base_url, api_key) = self
            .config
            .require()
            .map_err(|_| ClientError::ConfigMissing)?;

        let response = self
            .http
            .post(format!("{}{}", base_url.trim_end_matches('/'), endpoint))
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
