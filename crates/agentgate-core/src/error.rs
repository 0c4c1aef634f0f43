//! Error taxonomy for the gateway protocol

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing and invalid credentials produce the same message, so a
    /// caller cannot tell which one it was.
    #[error("unauthorized: missing or invalid API key")]
    Unauthorized,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("upstream model failure: {0}")]
    Upstream(String),

    #[error("model produced no content")]
    NoContent,

    #[error("configuration missing: {0} is not set")]
    ConfigMissing(String),

    #[error("loop limit exceeded: no final answer after {0} model exchanges")]
    LoopLimitExceeded(usize),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn config_missing(name: impl Into<String>) -> Self {
        Self::ConfigMissing(name.into())
    }
}
