//! HTTP wire protocol - request and response bodies
//!
//! Every endpoint takes a JSON body and the shared credential in the
//! `X-Agent-API-Key` header:
//!
//!   POST /chat                { "prompt": ..., "history": [...] }
//!   POST /execute_tool_call   { "toolCallId": "...", "toolResponse": {...} }
//!   POST /run                 { "prompt": "..." }
//!
//! Success bodies are `ChatResult` / `RunResult`; every failure status
//! carries an `ErrorBody`.

use crate::types::{Part, Turn};
use serde::{Deserialize, Serialize};

/// Header carrying the shared-secret credential.
pub const API_KEY_HEADER: &str = "x-agent-api-key";

/// Prompt forms accepted by `/chat` and `/run`: a bare string, a single
/// part, or a sequence of parts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prompt {
    Text(String),
    Part(Part),
    Parts(Vec<Part>),
}

impl Prompt {
    pub fn is_empty(&self) -> bool {
        match self {
            Prompt::Text(s) => s.is_empty(),
            Prompt::Part(_) => false,
            Prompt::Parts(parts) => parts.is_empty(),
        }
    }

    pub fn into_parts(self) -> Vec<Part> {
        match self {
            Prompt::Text(s) => vec![Part::Text(s)],
            Prompt::Part(part) => vec![part],
            Prompt::Parts(parts) => parts,
        }
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::Text(s.to_string())
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::Text(s)
    }
}

/// Body of `POST /chat`. `prompt` is required but kept optional here so
/// its absence surfaces as a 400, not a deserialization failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<Prompt>,
    #[serde(default)]
    pub history: Option<Vec<Turn>>,
}

/// Body of `POST /execute_tool_call`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteToolCallRequest {
    #[serde(default)]
    pub tool_call_id: Option<String>,
    #[serde(default)]
    pub tool_response: serde_json::Value,
}

/// Body of `POST /run`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub prompt: Option<Prompt>,
}

/// Body attached to every failure status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
