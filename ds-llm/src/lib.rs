//! BYO-key chat completion client for the DeepSeek API.
//!
//! Pure blocking HTTP client: one request per call, no retries, no streaming.

mod client;
mod deepseek;
mod error;
mod types;

pub use client::ChatClient;
pub use error::{ChatError, Result};
pub use types::{ChatMessage, CompletionResult, Role, Usage};
