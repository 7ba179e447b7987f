use crate::error::{ChatError, Result};
use crate::types::{ChatMessage, CompletionResult, Role, Usage};
use serde::{Deserialize, Serialize};

pub(crate) const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Serialize)]
pub(crate) struct DeepSeekChatRequest {
    model: String,
    messages: Vec<DeepSeekMessage>,
}

#[derive(Debug, Serialize)]
struct DeepSeekMessage {
    role: String,
    content: String,
}

impl DeepSeekChatRequest {
    pub(crate) fn new(model: &str, messages: &[ChatMessage]) -> Self {
        Self {
            model: model.to_string(),
            messages: messages.iter().map(to_deepseek_message).collect(),
        }
    }
}

fn to_deepseek_message(m: &ChatMessage) -> DeepSeekMessage {
    DeepSeekMessage {
        role: m.role.as_str().to_string(),
        content: m.content.clone(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeepSeekChatResponse {
    choices: Vec<DeepSeekChoice>,
    #[serde(default)]
    usage: Option<Usage>,
    /// Provider-defined fields (id, created, model, ...) kept opaque.
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DeepSeekChoice {
    message: DeepSeekChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeepSeekChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl TryFrom<DeepSeekChatResponse> for CompletionResult {
    type Error = ChatError;

    fn try_from(v: DeepSeekChatResponse) -> Result<Self> {
        let choice = v.choices.into_iter().next().ok_or_else(|| {
            ChatError::ResponseFormat("deepseek response missing choices".to_string())
        })?;

        Ok(CompletionResult {
            message: ChatMessage {
                role: Role::Assistant,
                content: choice.message.content.unwrap_or_default(),
            },
            usage: v.usage,
            finish_reason: choice.finish_reason,
            metadata: v.extra,
        })
    }
}

/// Map a non-2xx status plus body to the error taxonomy. 401/403 and 429 get
/// their own labels; everything else carries the provider's status through.
pub(crate) fn map_error_status(status: reqwest::StatusCode, body: &str) -> ChatError {
    let message = error_message(body);
    match status.as_u16() {
        401 | 403 => ChatError::Authentication(message),
        429 => ChatError::RateLimit(message),
        status => ChatError::Provider { status, message },
    }
}

/// Best-effort extraction of `error.message` from the provider's error
/// envelope, falling back to the raw body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.to_string(),
    }
}
