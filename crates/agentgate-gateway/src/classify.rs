//! Turn classification - final answer vs. tool requests

use agentgate_core::types::{Part, ToolRequest, Turn};
use agentgate_core::{Error, Result};
use agentgate_llm::{FinishReason, ModelReply};
use uuid::Uuid;

/// Outcome of classifying one model reply. The model turn is carried in
/// both arms so the caller can append it to history.
#[derive(Clone, Debug)]
pub enum Classified {
    FinalAnswer(Turn),
    ToolRequests {
        turn: Turn,
        requests: Vec<ToolRequest>,
    },
}

/// Classify a model reply.
///
/// Only the first candidate is consulted; subsequent candidates are
/// ignored. An empty reply, a candidate without content, or a candidate
/// with zero parts is an error, never an implicit empty answer.
pub fn classify(reply: ModelReply) -> Result<Classified> {
    let candidate = reply
        .candidates
        .into_iter()
        .next()
        .ok_or(Error::NoContent)?;
    let turn = candidate.content.ok_or(Error::NoContent)?;
    if turn.parts.is_empty() {
        return Err(Error::NoContent);
    }

    if candidate.finish_reason == Some(FinishReason::ToolCalls) {
        let requests: Vec<ToolRequest> = turn
            .parts
            .iter()
            .filter_map(tool_request_from_part)
            .collect();
        if requests.is_empty() {
            return Err(Error::upstream(
                "tool-call finish reason without tool-call parts",
            ));
        }
        return Ok(Classified::ToolRequests { turn, requests });
    }

    Ok(Classified::FinalAnswer(turn))
}

/// Legacy `functionCall` parts carry no id, so one is minted here; the
/// caller correlates tool results against it later.
fn tool_request_from_part(part: &Part) -> Option<ToolRequest> {
    match part {
        Part::FunctionCall(call) => Some(ToolRequest {
            id: format!("fc-{}", Uuid::new_v4()),
            name: call.name.clone(),
            args: call.args.clone(),
        }),
        Part::ToolCall(call) => Some(ToolRequest {
            id: call.id.clone(),
            name: call.name.clone(),
            args: call.args.clone(),
        }),
        Part::Text(_) | Part::InlineData(_) | Part::FunctionResponse(_) => None,
    }
}
