//! Core types for Agentgate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message role within a conversation turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// An atomic content unit within a turn.
///
/// Serializes as a single-key object: `{"text": "..."}`,
/// `{"functionCall": {...}}`, and so on. Exactly one tag per instance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(Blob),
    FunctionCall(FunctionCall),
    ToolCall(ToolCall),
    FunctionResponse(FunctionResponse),
}

impl Part {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Whether this part asks for an external capability to be invoked.
    pub fn is_tool_invocation(&self) -> bool {
        matches!(self, Part::FunctionCall(_) | Part::ToolCall(_))
    }
}

/// Raw inline bytes, base64-encoded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

/// A tool invocation in the legacy wire spelling, without an id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// A tool invocation carrying its own correlation id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
    pub id: String,
}

/// The outcome of a tool invocation, sent back to the model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionResponse {
    pub name: String,
    pub response: serde_json::Value,
}

/// One message exchange unit containing ordered parts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Self {
            role: Role::Model,
            parts,
        }
    }

    /// Concatenation of all text parts, in order.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Server-held conversational state for one logical conversation.
///
/// Owned exclusively by the gateway; clients only ever supply an optional
/// override history per request.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub model: String,
    pub history: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pending: Vec<ToolRequest>,
}

impl Session {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: format!("server-session-{}", Uuid::new_v4()),
            model: model.into(),
            history: Vec::new(),
            created_at: Utc::now(),
            pending: Vec::new(),
        }
    }

    /// Full overwrite, not an append. Callers resuming a conversation
    /// must resend the complete prior history. Pending tool requests
    /// belong to the abandoned turn and are dropped with it.
    pub fn replace_history(&mut self, history: Vec<Turn>) {
        self.history = history;
        self.pending.clear();
    }

    pub fn push(&mut self, turn: Turn) {
        self.history.push(turn);
    }

    pub fn pop(&mut self) -> Option<Turn> {
        self.history.pop()
    }

    /// Tool requests extracted from the last model turn, awaiting results.
    pub fn pending_requests(&self) -> &[ToolRequest] {
        &self.pending
    }

    pub fn set_pending(&mut self, requests: Vec<ToolRequest>) {
        self.pending = requests;
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}

/// A model-originated instruction to invoke an external capability.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolRequest {
    pub id: String,
    pub name: String,
    pub args: serde_json::Value,
}

/// The caller-supplied outcome for one tool request, resuming a paused
/// conversation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub tool_request_id: String,
    pub payload: serde_json::Value,
}

/// Outcome of a single gateway turn. Exactly one of `final_answer` and
/// `tool_requests` is populated; `history` reflects the session after
/// the turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    #[serde(rename = "response")]
    pub final_answer: Option<Turn>,
    pub tool_requests: Option<Vec<ToolRequest>>,
    pub history: Vec<Turn>,
}

impl ChatResult {
    pub fn answer(turn: Turn, history: Vec<Turn>) -> Self {
        Self {
            final_answer: Some(turn),
            tool_requests: None,
            history,
        }
    }

    pub fn tools(requests: Vec<ToolRequest>, history: Vec<Turn>) -> Self {
        Self {
            final_answer: None,
            tool_requests: Some(requests),
            history,
        }
    }
}

/// Outcome of an end-to-end run. An error implies no final answer; a
/// result with neither signals an unexpected truncation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub final_answer: Option<String>,
    pub history: Vec<Turn>,
    pub error: Option<String>,
}

impl RunResult {
    pub fn answered(final_answer: impl Into<String>, history: Vec<Turn>) -> Self {
        Self {
            final_answer: Some(final_answer.into()),
            history,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, history: Vec<Turn>) -> Self {
        Self {
            final_answer: None,
            history,
            error: Some(error.into()),
        }
    }

    pub fn truncated(history: Vec<Turn>) -> Self {
        Self {
            final_answer: None,
            history,
            error: None,
        }
    }
}
