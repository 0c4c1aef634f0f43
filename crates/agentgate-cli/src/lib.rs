//! Agentgate CLI - Agent client and non-interactive runner

pub mod client;
pub mod runner;

pub use client::{AgentClient, ClientError, ClientResult};
pub use runner::run_non_interactive;
