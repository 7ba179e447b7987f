use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing or empty credential, caught at construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The remote service rejected the credential (401/403).
    #[error("authentication rejected: {0}")]
    Authentication(String),

    /// Network-level failure: connection refused, DNS, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider signalled throttling (429).
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// Any other non-2xx response, with the provider's status and message.
    #[error("provider error: status={status} {message}")]
    Provider { status: u16, message: String },

    /// A 2xx body that does not parse as a completion.
    #[error("unexpected response format: {0}")]
    ResponseFormat(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        Self::ResponseFormat(e.to_string())
    }
}
