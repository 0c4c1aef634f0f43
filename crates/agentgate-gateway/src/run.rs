//! Run loop - drives chat and tool-result turns to a final answer

use crate::service::{prompt_parts, GatewayService};
use agentgate_core::protocol::Prompt;
use agentgate_core::types::{RunResult, ToolRequest, ToolResult};
use agentgate_core::{Error, Result};
use futures::future::join_all;
use tracing::{info, warn};

/// External tool execution collaborator.
///
/// Implementations run the capability named in the request and report
/// its outcome as a JSON payload. Failures are payloads too, never
/// panics; the model decides what to do with them.
#[async_trait::async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, request: &ToolRequest) -> ToolResult;
}

/// Stand-in executor for deployments without a sandbox. Every request
/// resolves to an error payload, so runs still terminate.
pub struct NullToolExecutor;

#[async_trait::async_trait]
impl ToolExecutor for NullToolExecutor {
    async fn execute(&self, request: &ToolRequest) -> ToolResult {
        ToolResult {
            tool_request_id: request.id.clone(),
            payload: serde_json::json!({
                "error": format!("no tool executor configured for '{}'", request.name),
            }),
        }
    }
}

impl GatewayService {
    /// Drive the protocol end to end for one prompt.
    ///
    /// The session lock is held across the whole run. Upstream failures
    /// and an exhausted turn budget land in `RunResult::error`; only a
    /// rejected prompt surfaces as `Err`.
    pub async fn run(&self, prompt: Option<Prompt>) -> Result<RunResult> {
        let parts = prompt_parts(prompt)?;
        let mut session = self.session.lock().await;

        let mut turns = 0usize;
        let mut outcome = self.chat_turn(&mut session, parts).await;

        loop {
            turns += 1;

            let result = match outcome {
                Ok(result) => result,
                Err(e) => {
                    warn!("run failed on turn {}: {}", turns, e);
                    return Ok(RunResult::failed(e.to_string(), session.history.clone()));
                }
            };

            if let Some(turn) = result.final_answer {
                let text = turn.text();
                if text.is_empty() {
                    warn!("run produced a final turn without text after {} turn(s)", turns);
                    return Ok(RunResult::truncated(result.history));
                }
                info!("run finished after {} turn(s)", turns);
                return Ok(RunResult::answered(text, result.history));
            }

            // The classifier upholds the one-of invariant, so this arm is
            // always populated when there is no final answer.
            let Some(requests) = result.tool_requests else {
                return Ok(RunResult::truncated(result.history));
            };

            if turns >= self.max_run_turns {
                warn!("run hit the turn limit of {}", self.max_run_turns);
                return Ok(RunResult::failed(
                    Error::LoopLimitExceeded(self.max_run_turns).to_string(),
                    result.history,
                ));
            }

            // Dispatch this turn's tool executions concurrently, join,
            // then resubmit the collected results as one turn.
            let results = join_all(
                requests
                    .iter()
                    .map(|request| self.executor.execute(request)),
            )
            .await;

            outcome = self.tool_result_turn(&mut session, results).await;
        }
    }
}
