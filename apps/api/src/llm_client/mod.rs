//! LLM Client: the single point of entry for all chat-completion calls in SkillSync.
//!
//! No other module may call the completion API directly.
//!
//! Model: gpt-4o-mini (fixed, not configurable)
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
#[cfg(test)]
pub(crate) mod test_support;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all LLM calls in SkillSync.
pub const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gave up after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<LlmError>,
    },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Bounded retry with exponential backoff: `base_delay * 2^(attempt - 1)`
/// before each retry.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Delay before the given attempt (0-based). The first attempt never waits.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let factor = 1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub retry: RetryPolicy,
}

/// The single LLM client used by all services in SkillSync.
/// Wraps the chat-completion API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    retry: RetryPolicy,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key: config.api_key,
            api_url: config.api_url,
            retry: config.retry,
        })
    }

    /// Makes a raw call to the completion API, returning the full response object.
    /// Retries on transport errors, 429 (rate limit) and 5xx with exponential backoff.
    pub async fn call(&self, messages: &[ChatMessage]) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let attempts = self.retry.max_attempts.max(1);
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = self.retry.delay_before(attempt);
                warn!(
                    "LLM call attempt {}/{} failed, retrying after {}ms...",
                    attempt,
                    attempts,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "LLM call {} succeeded: prompt_tokens={}, completion_tokens={}",
                    chat_response.id, usage.prompt_tokens, usage.completion_tokens
                );
            }

            return Ok(chat_response);
        }

        Err(LlmError::RetriesExhausted {
            attempts,
            source: Box::new(last_error.unwrap_or(LlmError::EmptyContent)),
        })
    }

    /// Calls the LLM and returns the text of the first choice.
    pub async fn call_text(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let response = self.call(messages).await?;
        response
            .text()
            .map(|t| t.trim().to_string())
            .ok_or(LlmError::EmptyContent)
    }

    /// Convenience method that calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        messages: &[ChatMessage],
    ) -> Result<T, LlmError> {
        let text = self.call_text(messages).await?;
        parse_json_response(&text)
    }
}

/// Parses model output as JSON, tolerating code fences and prose around the
/// outermost object.
pub fn parse_json_response<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let stripped = strip_json_fences(text);
    match serde_json::from_str(stripped) {
        Ok(value) => Ok(value),
        Err(err) => match outermost_object(stripped) {
            Some(object) => {
                debug!("Recovered JSON object from surrounding text");
                serde_json::from_str(object).map_err(LlmError::Parse)
            }
            None => Err(LlmError::Parse(err)),
        },
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// The span from the first `{` to the last `}`.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use super::test_support::{completion, fake_api, test_client as client};
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_json_response_recovers_object_from_prose() {
        let input = "Here is the analysis:\n{\"score\": 72}\nHope this helps!";
        let value: Value = parse_json_response(input).unwrap();
        assert_eq!(value["score"], 72);
    }

    #[test]
    fn test_parse_json_response_without_object_fails() {
        let err = parse_json_response::<Value>("no json here").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy {
            max_attempts: 4,
            base_delay: Duration::from_millis(1000),
        };
        assert_eq!(policy.delay_before(0), Duration::ZERO);
        assert_eq!(policy.delay_before(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_before(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_before(3), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(40), Duration::from_millis(1000).saturating_mul(u32::MAX));
    }

    #[tokio::test]
    async fn test_retries_server_errors_then_succeeds() {
        let (url, hits) = fake_api(vec![
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": {"message": "boom"}})),
            (StatusCode::TOO_MANY_REQUESTS, json!({"error": {"message": "slow down"}})),
            (StatusCode::OK, completion("hello")),
        ])
        .await;

        let text = client(url, 4)
            .call_text(&[ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(text, "hello");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausted_retries_are_reported() {
        let (url, hits) = fake_api(vec![(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({"error": {"message": "down"}}),
        )])
        .await;

        let err = client(url, 3)
            .call(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        match err {
            LlmError::RetriesExhausted { attempts, source } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*source, LlmError::Api { status: 503, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let (url, hits) = fake_api(vec![(
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "bad key"}}),
        )])
        .await;

        let err = client(url, 4)
            .call(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_call_json_parses_fenced_content() {
        let (url, _) = fake_api(vec![(
            StatusCode::OK,
            completion("```json\n{\"score\": 81}\n```"),
        )])
        .await;

        let value: Value = client(url, 1)
            .call_json(&[ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(value["score"], 81);
    }

    #[tokio::test]
    async fn test_blank_content_is_empty() {
        let (url, _) = fake_api(vec![(StatusCode::OK, completion("   "))]).await;

        let err = client(url, 1)
            .call_text(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
