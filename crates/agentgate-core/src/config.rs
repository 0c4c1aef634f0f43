//! Environment configuration for the gateway and the client
//!
//! Both sides read their configuration once at startup. The gateway
//! fails fast when a required credential is unset; the client constructs
//! regardless and fails per call instead.

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_MAX_RUN_TURNS: usize = 10;

/// Server-side configuration.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub port: u16,
    pub model: String,
    pub max_run_turns: usize,
    /// Shared secret callers must present in `X-Agent-API-Key`.
    pub shared_secret: String,
    /// Credential for the model backend.
    pub gemini_api_key: String,
}

impl GatewayConfig {
    /// Read from the environment. `GEMINI_API_KEY` and
    /// `AGENT_SERVER_API_KEY` are required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: read_env("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            model: read_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_run_turns: read_env("AGENT_MAX_TURNS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_MAX_RUN_TURNS),
            shared_secret: require_env("AGENT_SERVER_API_KEY")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
        })
    }
}

/// Client-side configuration. Missing values are tolerated at
/// construction and rejected on use.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: read_env("AGENT_SERVER_URL"),
            api_key: read_env("AGENT_SERVER_API_KEY"),
        }
    }

    /// Both values, or `ConfigMissing` naming the absent one.
    pub fn require(&self) -> Result<(&str, &str)> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config_missing("AGENT_SERVER_URL"))?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config_missing("AGENT_SERVER_API_KEY"))?;
        Ok((base_url, api_key))
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn require_env(name: &str) -> Result<String> {
    read_env(name).ok_or_else(|| Error::config_missing(name))
}
