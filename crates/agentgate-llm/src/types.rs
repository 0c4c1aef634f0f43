//! Model reply types

use agentgate_core::types::Turn;
use serde::{Deserialize, Serialize};

/// Completion reason reported by the model backend.
///
/// `TOOL_CODE` is the canonical tool-request code. The transitional
/// `MODEL_REQUESTED_TOOL_CALLS` spelling is accepted on deserialization
/// only and is never emitted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FinishReason {
    #[serde(rename = "STOP")]
    Stop,
    #[serde(rename = "TOOL_CODE", alias = "MODEL_REQUESTED_TOOL_CALLS")]
    ToolCalls,
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,
    #[serde(rename = "SAFETY")]
    Safety,
    #[serde(other)]
    Other,
}

/// One ranked completion from the model.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Turn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

/// Reply from a `ChatModel::send_message` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModelReply {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl ModelReply {
    /// A reply with exactly one candidate.
    pub fn single(content: Turn, finish_reason: FinishReason) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(content),
                finish_reason: Some(finish_reason),
            }],
        }
    }
}
