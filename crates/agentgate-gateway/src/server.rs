//! HTTP surface - axum routes, auth middleware, and error mapping

use crate::auth::SharedSecret;
use crate::run::NullToolExecutor;
use crate::service::GatewayService;
use agentgate_core::protocol::{
    ChatRequest, ErrorBody, ExecuteToolCallRequest, RunRequest, API_KEY_HEADER,
};
use agentgate_core::types::{ChatResult, RunResult, ToolResult};
use agentgate_core::{Error, GatewayConfig};
use agentgate_llm::GeminiModel;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub struct AppState {
    pub auth: SharedSecret,
    pub service: GatewayService,
}

/// Build the router. Split from [`start_gateway`] so tests can drive the
/// surface without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/chat", post(chat_handler))
        .route("/execute_tool_call", post(execute_tool_call_handler))
        .route("/run", post(run_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

pub async fn start_gateway(config: GatewayConfig) -> anyhow::Result<()> {
    let model = Arc::new(GeminiModel::new(&config.gemini_api_key));
    let service = GatewayService::new(
        model,
        &config.model,
        Arc::new(NullToolExecutor),
        config.max_run_turns,
    );
    let state = Arc::new(AppState {
        auth: SharedSecret::new(&config.shared_secret),
        service,
    });

    let bind_addr: SocketAddr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Agentgate v{} starting", env!("CARGO_PKG_VERSION"));
    info!("  Listening on: {}", bind_addr);
    info!("  Model: {}", config.model);
    info!("  Run turn limit: {}", config.max_run_turns);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// Auth gate: every protected route passes through here before any
/// session work happens.
async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = state.auth.verify(provided) {
        return ApiError(e).into_response();
    }
    next.run(request).await
}

async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.service.model_id(),
    }))
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResult>, ApiError> {
    let result = state.service.handle_chat(body.prompt, body.history).await?;
    Ok(Json(result))
}

async fn execute_tool_call_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ExecuteToolCallRequest>,
) -> Result<Json<ChatResult>, ApiError> {
    let tool_call_id = body
        .tool_call_id
        .ok_or_else(|| Error::bad_request("toolCallId is required"))?;
    let result = state
        .service
        .handle_tool_results(vec![ToolResult {
            tool_request_id: tool_call_id,
            payload: body.tool_response,
        }])
        .await?;
    Ok(Json(result))
}

async fn run_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RunRequest>,
) -> Result<Json<RunResult>, ApiError> {
    let result = state.service.run(body.prompt).await?;
    Ok(Json(result))
}

/// Maps the error taxonomy onto HTTP statuses. Upstream detail is logged
/// here; the credential never is.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Upstream(_)
            | Error::NoContent
            | Error::ConfigMissing(_)
            | Error::LoopLimitExceeded(_)
            | Error::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", self.0);
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
