//! Gateway service - one conversation turn at a time against the shared
//! session

use crate::classify::{classify, Classified};
use crate::run::ToolExecutor;
use crate::session::SessionStore;
use agentgate_core::protocol::Prompt;
use agentgate_core::types::{
    ChatResult, FunctionResponse, Part, Session, ToolResult, Turn,
};
use agentgate_core::{Error, Result};
use agentgate_llm::ChatModel;
use std::sync::Arc;
use tracing::debug;

pub struct GatewayService {
    model: Arc<dyn ChatModel>,
    pub(crate) executor: Arc<dyn ToolExecutor>,
    pub(crate) session: SessionStore,
    pub(crate) max_run_turns: usize,
    model_id: String,
}

impl GatewayService {
    pub fn new(
        model: Arc<dyn ChatModel>,
        model_id: impl Into<String>,
        executor: Arc<dyn ToolExecutor>,
        max_run_turns: usize,
    ) -> Self {
        let model_id = model_id.into();
        Self {
            model,
            executor,
            session: SessionStore::new(&model_id),
            max_run_turns,
            model_id,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The session's history as it stands right now.
    pub async fn history_snapshot(&self) -> Vec<Turn> {
        self.session.lock().await.history.clone()
    }

    /// Handle one chat turn. A supplied history replaces the session's
    /// current history wholesale before the prompt is appended.
    pub async fn handle_chat(
        &self,
        prompt: Option<Prompt>,
        history: Option<Vec<Turn>>,
    ) -> Result<ChatResult> {
        let parts = prompt_parts(prompt)?;
        let mut session = self.session.lock().await;
        if let Some(history) = history {
            session.replace_history(history);
        }
        self.chat_turn(&mut session, parts).await
    }

    /// Resume a conversation paused on tool requests.
    pub async fn handle_tool_results(&self, results: Vec<ToolResult>) -> Result<ChatResult> {
        if results.is_empty() {
            return Err(Error::bad_request("at least one tool result is required"));
        }
        let mut session = self.session.lock().await;
        self.tool_result_turn(&mut session, results).await
    }

    /// Append the prompt as a user turn and exchange it with the model.
    pub(crate) async fn chat_turn(
        &self,
        session: &mut Session,
        parts: Vec<Part>,
    ) -> Result<ChatResult> {
        session.push(Turn::user(parts));
        self.exchange(session).await
    }

    /// Append tool results as a user turn of `functionResponse` parts and
    /// exchange it with the model. Results must answer requests the
    /// session is actually waiting on.
    pub(crate) async fn tool_result_turn(
        &self,
        session: &mut Session,
        results: Vec<ToolResult>,
    ) -> Result<ChatResult> {
        let mut parts = Vec::with_capacity(results.len());
        for result in results {
            let name = session
                .pending_requests()
                .iter()
                .find(|r| r.id == result.tool_request_id)
                .map(|r| r.name.clone())
                .ok_or_else(|| {
                    Error::bad_request(format!(
                        "unknown tool request id: {}",
                        result.tool_request_id
                    ))
                })?;
            parts.push(Part::FunctionResponse(FunctionResponse {
                name,
                response: result.payload,
            }));
        }
        // Pending requests stay until the exchange succeeds, so a retry
        // after a transient failure still correlates.
        session.push(Turn::user(parts));
        self.exchange(session).await
    }

    /// Invoke the model with the session context and classify the reply.
    ///
    /// On any failure the just-appended user turn is rolled back and
    /// pending tool requests are left untouched, so a caller's retry
    /// does not duplicate the turn and still correlates its results.
    async fn exchange(&self, session: &mut Session) -> Result<ChatResult> {
        let outcome = self
            .model
            .send_message(&session.model, &session.history)
            .await;

        let reply = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                session.pop();
                return Err(Error::upstream(e.to_string()));
            }
        };

        let classified = match classify(reply) {
            Ok(c) => c,
            Err(e) => {
                session.pop();
                return Err(e);
            }
        };

        match classified {
            Classified::FinalAnswer(turn) => {
                debug!("turn classified as final answer");
                session.push(turn.clone());
                session.clear_pending();
                Ok(ChatResult::answer(turn, session.history.clone()))
            }
            Classified::ToolRequests { turn, requests } => {
                debug!("turn classified as {} tool request(s)", requests.len());
                session.push(turn);
                session.set_pending(requests.clone());
                Ok(ChatResult::tools(requests, session.history.clone()))
            }
        }
    }
}

/// Reject missing and empty prompts before any session or model work.
pub(crate) fn prompt_parts(prompt: Option<Prompt>) -> Result<Vec<Part>> {
    let prompt = prompt.ok_or_else(|| Error::bad_request("prompt is required"))?;
    if prompt.is_empty() {
        return Err(Error::bad_request("prompt is required"));
    }
    Ok(prompt.into_parts())
}
