//! Model capability trait

use crate::types::ModelReply;
use agentgate_core::types::Turn;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Model backend error types
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("rate limited")]
    RateLimited,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// The opaque conversational capability: one context in, one reply out.
///
/// The gateway never inspects transport details; everything it needs is
/// in the returned `ModelReply`.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    fn name(&self) -> &str;

    /// Send the full conversation context and get the model's reply.
    async fn send_message(&self, model: &str, history: &[Turn]) -> ModelResult<ModelReply>;
}
