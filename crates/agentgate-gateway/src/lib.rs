//! Agentgate Gateway - Auth gate, session store, turn handlers, and the
//! HTTP surface

pub mod auth;
pub mod classify;
pub mod run;
pub mod server;
pub mod service;
pub mod session;

pub use auth::SharedSecret;
pub use run::{NullToolExecutor, ToolExecutor};
pub use server::{app, start_gateway, AppState};
pub use service::GatewayService;
