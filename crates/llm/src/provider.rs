use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A chat message for the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Trait for completion-service backends — each provider implements this.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a chat completion request and return the assistant's response text.
    async fn complete(
        &self,
        messages: Vec<Message>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} — {body}")]
    ApiError { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    ParseError(String),
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// Test double that returns queued responses in order and records every
/// request it receives.
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// One completion request as received by the mock.
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub messages: Vec<Message>,
        pub temperature: f32,
        pub max_tokens: u32,
    }

    /// Clones share state, so a test can keep a handle to inspect calls
    /// after handing the provider to the code under test.
    #[derive(Clone)]
    pub struct MockProvider {
        responses: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl MockProvider {
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(VecDeque::new())),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Queue a text response for the next unanswered call.
        pub fn queue_text(&self, text: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(text.to_string()));
        }

        /// Queue a failure for the next unanswered call.
        pub fn queue_error(&self, detail: &str) {
            self.responses.lock().unwrap().push_back(Err(LlmError::ApiError {
                status: 500,
                body: detail.to_string(),
            }));
        }

        /// All requests received so far, in call order.
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn complete(
            &self,
            messages: Vec<Message>,
            temperature: f32,
            max_tokens: u32,
        ) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(RecordedCall {
                messages,
                temperature,
                max_tokens,
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }
}
