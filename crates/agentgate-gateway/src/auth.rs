//! Authentication handling

use agentgate_core::{Error, Result};

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// The gateway's configured shared secret. Callers present theirs in the
/// `X-Agent-API-Key` header; the verdict never reveals whether the key
/// was missing or wrong, and the presented value is never logged.
#[derive(Clone)]
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn verify(&self, provided: Option<&str>) -> Result<()> {
        let provided = provided.ok_or(Error::Unauthorized)?;
        if !constant_time_eq(self.secret.as_bytes(), provided.as_bytes()) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
