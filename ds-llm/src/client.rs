use crate::deepseek::{
    CHAT_COMPLETIONS_PATH, DEEPSEEK_BASE_URL, DeepSeekChatRequest, DeepSeekChatResponse,
    map_error_status,
};
use crate::error::{ChatError, Result};
use crate::types::{ChatMessage, CompletionResult};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking single-turn chat completion client for the DeepSeek API.
///
/// Holds the credential and model identifier for its lifetime; stateless
/// between invocations, so one instance can serve any number of independent
/// `complete` calls.
#[derive(Clone, Debug)]
pub struct ChatClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    /// Fails with `Configuration` before any network activity if the
    /// credential is empty.
    pub fn new(api_key: &str, model: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ChatError::Configuration(
                "api key is missing or empty".to_string(),
            ));
        }
        Ok(Self {
            http: build_http(DEFAULT_TIMEOUT),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: DEEPSEEK_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different completion endpoint (test harnesses,
    /// self-hosted gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the transport timeout; enforced by the HTTP layer.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the conversation and return the model's single reply.
    ///
    /// Issues exactly one blocking HTTP request; no caching, no retries. The
    /// message list is sent in the given order with roles and content
    /// unchanged.
    #[tracing::instrument(level = "info", skip_all, fields(model = %self.model, messages = messages.len()))]
    pub fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResult> {
        if messages.is_empty() {
            return Err(ChatError::InvalidInput(
                "messages must be non-empty".to_string(),
            ));
        }

        let req = DeepSeekChatRequest::new(&self.model, messages);
        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(map_error_status(status, &body));
        }

        let parsed: DeepSeekChatResponse = serde_json::from_str(&body)?;
        parsed.try_into()
    }
}

fn build_http(timeout: Duration) -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(%e, "reqwest client build failed; falling back to default client");
            reqwest::blocking::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credential_is_rejected_at_construction() {
        let err = ChatClient::new("", "deepseek-chat").expect_err("must fail");
        assert!(matches!(err, ChatError::Configuration(_)));

        let err = ChatClient::new("   ", "deepseek-chat").expect_err("must fail");
        assert!(matches!(err, ChatError::Configuration(_)));
    }

    #[test]
    fn empty_message_list_is_rejected_before_sending() {
        let client = ChatClient::new("sk-test", "deepseek-chat").expect("valid key");
        let err = client.complete(&[]).expect_err("must fail");
        assert!(matches!(err, ChatError::InvalidInput(_)));
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = ChatClient::new("sk-test", "deepseek-chat")
            .expect("valid key")
            .with_base_url("http://127.0.0.1:8080/");
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }
}
