//! Local stand-in for the chat-completion API.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use super::{LlmClient, LlmConfig, RetryPolicy};

/// A successful completion whose first choice carries `content`.
pub(crate) fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [{
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
}

/// Serves `responses` in order, repeating the last one, and counts hits.
pub(crate) async fn fake_api(responses: Vec<(StatusCode, Value)>) -> (String, Arc<AtomicU32>) {
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();
    let responses = Arc::new(responses);
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move || {
            let counter = counter.clone();
            let responses = responses.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) as usize;
                let (status, body) = responses[n.min(responses.len() - 1)].clone();
                (status, Json(body))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1/chat/completions"), hits)
}

/// A client pointed at `api_url` with near-zero backoff.
pub(crate) fn test_client(api_url: String, max_attempts: u32) -> LlmClient {
    LlmClient::new(LlmConfig {
        api_key: "test-key".to_string(),
        api_url,
        retry: RetryPolicy {
            max_attempts,
            base_delay: std::time::Duration::from_millis(1),
        },
    })
    .unwrap()
}
