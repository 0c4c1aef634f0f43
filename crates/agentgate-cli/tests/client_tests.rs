//! Client tests against an in-process gateway

use agentgate_cli::client::{AgentClient, ClientError};
use agentgate_core::types::{Part, ToolCall, ToolRequest, ToolResult, Turn};
use agentgate_core::ClientConfig;
use agentgate_gateway::{app, AppState, GatewayService, SharedSecret, ToolExecutor};
use agentgate_llm::{ChatModel, FinishReason, ModelError, ModelReply, ModelResult};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Arc;

const TEST_KEY: &str = "test-secret-key";

struct ScriptedModel {
    replies: tokio::sync::Mutex<VecDeque<ModelReply>>,
}

#[async_trait::async_trait]
impl ChatModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send_message(&self, _model: &str, _history: &[Turn]) -> ModelResult<ModelReply> {
        self.replies
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| ModelError::RequestFailed("script exhausted".into()))
    }
}

struct EchoExecutor;

#[async_trait::async_trait]
impl ToolExecutor for EchoExecutor {
    async fn execute(&self, request: &ToolRequest) -> ToolResult {
        ToolResult {
            tool_request_id: request.id.clone(),
            payload: json!({"echo": request.args}),
        }
    }
}

/// Serve the router on an ephemeral port and hand back a configured
/// client plus the base URL it points at.
async fn spawn_gateway(replies: Vec<ModelReply>) -> (AgentClient, String) {
    let service = GatewayService::new(
        Arc::new(ScriptedModel {
            replies: tokio::sync::Mutex::new(replies.into()),
        }),
        "gemini-pro",
        Arc::new(EchoExecutor),
        10,
    );
    let state = Arc::new(AppState {
        auth: SharedSecret::new(TEST_KEY),
        service,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    let base_url = format!("http://{}", addr);
    let client = AgentClient::new(ClientConfig {
        base_url: Some(base_url.clone()),
        api_key: Some(TEST_KEY.into()),
    });
    (client, base_url)
}

fn text_reply(text: &str) -> ModelReply {
    ModelReply::single(Turn::model(vec![Part::text(text)]), FinishReason::Stop)
}

fn tool_reply(name: &str, id: &str) -> ModelReply {
    ModelReply::single(
        Turn::model(vec![Part::ToolCall(ToolCall {
            name: name.into(),
            args: json!({"q": "x"}),
            id: id.into(),
        })]),
        FinishReason::ToolCalls,
    )
}

// ===========================================================================
// Configuration
// ===========================================================================

#[tokio::test]
async fn unconfigured_client_fails_without_touching_network() {
    let client = AgentClient::new(ClientConfig::default());
    let err = client.chat("hello", None).await.unwrap_err();
    assert!(matches!(err, ClientError::ConfigMissing));

    let err = client.run("hello").await.unwrap_err();
    assert!(matches!(err, ClientError::ConfigMissing));
}

// ===========================================================================
// End-to-end
// ===========================================================================

#[tokio::test]
async fn chat_round_trip() {
    let (client, _) = spawn_gateway(vec![text_reply("Mocked chat response")]).await;

    let result = client.chat("hello", None).await.unwrap();
    assert_eq!(
        result.final_answer.unwrap().text(),
        "Mocked chat response"
    );
    assert!(result.tool_requests.is_none());
    assert_eq!(result.history.len(), 2);
}

#[tokio::test]
async fn chat_with_history_then_tool_call_round_trip() {
    let (client, _) = spawn_gateway(vec![
        tool_reply("read", "tc-1"),
        text_reply("done reading"),
    ])
    .await;

    let history = vec![
        Turn::user(vec![Part::text("earlier")]),
        Turn::model(vec![Part::text("noted")]),
    ];
    let result = client.chat("read it", Some(history)).await.unwrap();
    let requests = result.tool_requests.unwrap();
    assert_eq!(requests[0].name, "read");

    let result = client
        .execute_tool_call(&requests[0].id, json!({"content": "stuff"}))
        .await
        .unwrap();
    assert_eq!(result.final_answer.unwrap().text(), "done reading");
    // 2 supplied + prompt + tool call + tool result + answer
    assert_eq!(result.history.len(), 6);
}

#[tokio::test]
async fn run_round_trip() {
    let (client, _) = spawn_gateway(vec![tool_reply("lookup", "tc-1"), text_reply("42")]).await;

    let result = client.run("the question").await.unwrap();
    assert_eq!(result.final_answer.as_deref(), Some("42"));
    assert!(result.error.is_none());
}

#[tokio::test]
async fn wrong_key_surfaces_status_and_body() {
    let (_client, base_url) = spawn_gateway(vec![text_reply("unused")]).await;
    let bad = AgentClient::new(ClientConfig {
        base_url: Some(base_url),
        api_key: Some("wrong-key".into()),
    });

    let err = bad.chat("hello", None).await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("API key"), "unexpected body: {}", body);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}
