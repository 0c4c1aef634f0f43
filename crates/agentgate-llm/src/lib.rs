//! Agentgate LLM - The model capability trait and the Gemini provider

pub mod gemini;
pub mod provider;
pub mod types;

pub use gemini::GeminiModel;
pub use provider::{ChatModel, ModelError, ModelResult};
pub use types::{Candidate, FinishReason, ModelReply};
