//! Session store - the gateway-owned conversation state

use agentgate_core::types::Session;
use tokio::sync::{Mutex, MutexGuard};

/// Owns the process's single session.
///
/// Every turn handler locks it for the full duration of a turn, and a
/// run loop holds the guard across every turn it makes, so concurrent
/// requests can never interleave history mutations and a session runs
/// at most one run loop at a time.
pub struct SessionStore {
    inner: Mutex<Session>,
}

impl SessionStore {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Session::new(model)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().await
    }
}
