//! Chat completion provider abstraction.
//!
//! The chat proxy only needs one operation: send a single user turn and get
//! the first reply back. Backends are swappable (OpenAI, mock).

pub mod mock;
pub mod openai;

pub use mock::MockCompletionProvider;
pub use openai::{OpenAiConfig, OpenAiProvider};

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completion call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionResponse {
    /// Content of the first choice, if the provider returned any.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: u32,

    /// Output tokens generated.
    pub output_tokens: u32,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `message` as a single user turn, without history or system prompt.
    async fn complete(&self, message: &str) -> Result<CompletionResponse, ProviderError>;
}
