//! Mock provider implementation for testing.

use super::{CompletionProvider, CompletionResponse, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer every message with this text.
    Reply(String),
    /// Succeed without any content.
    Empty,
    /// Fail every call with an API error carrying this detail.
    Fail(String),
}

/// Mock completion provider that records what it was asked.
pub struct MockCompletionProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_message: Mutex<Option<String>>,
}

impl MockCompletionProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_message: Mutex::new(None),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn failing(detail: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(detail.into()))
    }

    /// Number of times `complete` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_message(&self) -> Option<String> {
        self.last_message.lock().ok().and_then(|m| m.clone())
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, message: &str) -> Result<CompletionResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_message.lock() {
            *last = Some(message.to_string());
        }

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(CompletionResponse {
                text: Some(text.clone()),
                input_tokens: message.len() as u32 / 4,
                output_tokens: text.len() as u32 / 4,
            }),
            MockBehavior::Empty => Ok(CompletionResponse::default()),
            MockBehavior::Fail(detail) => Err(ProviderError::ApiError(detail.clone())),
        }
    }
}
