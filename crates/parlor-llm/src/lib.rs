//! Parlor LLM Provider Layer
//!
//! Pluggable LLM provider implementations for the chatbot.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `parlor-domain`. The chatbot only ever needs "conversation in, reply
//! text out"; everything protocol-specific (action JSON) happens in the
//! prompt and the extractor, not here.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `ChatApiProvider`: hosted OpenAI-style chat-completions API
//!
//! # Examples
//!
//! ```
//! use parlor_llm::MockProvider;
//! use parlor_domain::traits::LlmProvider;
//! use parlor_domain::ChatTurn;
//!
//! let provider = MockProvider::new("Hello from the bot!");
//! let turns = [ChatTurn::user("hi")];
//! let reply = provider.complete("system prompt", &turns).unwrap();
//! assert_eq!(reply, "Hello from the bot!");
//! ```

#![warn(missing_docs)]

pub mod chat_api;

use parlor_domain::traits::LlmProvider as LlmProviderTrait;
use parlor_domain::{ChatRole, ChatTurn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use chat_api::ChatApiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// API key missing or rejected
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls.
/// Replies can be keyed on the visitor's latest message.
///
/// # Examples
///
/// ```
/// use parlor_llm::MockProvider;
/// use parlor_domain::traits::LlmProvider;
/// use parlor_domain::ChatTurn;
///
/// let mut provider = MockProvider::new("default reply");
/// provider.add_response("pricing?", "It depends on scope.");
///
/// let turns = [ChatTurn::user("pricing?")];
/// assert_eq!(provider.complete("sys", &turns).unwrap(), "It depends on scope.");
///
/// let turns = [ChatTurn::user("anything else")];
/// assert_eq!(provider.complete("sys", &turns).unwrap(), "default reply");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    replies: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all conversations
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific reply for a given visitor message
    pub fn add_response(&mut self, message: impl Into<String>, reply: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(message.into(), reply.into());
    }

    /// Configure an error for a given visitor message
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(message.into(), "ERROR".to_string());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock reply")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(&self, _system_prompt: &str, turns: &[ChatTurn]) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        // Key replies on the visitor's latest message
        let latest = turns
            .iter()
            .rev()
            .find(|t| t.role == ChatRole::User)
            .map(|t| t.content.as_str())
            .unwrap_or("");

        let replies = self.replies.lock().unwrap();
        if let Some(reply) = replies.get(latest) {
            if reply == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(reply.clone());
        }

        Ok(self.default_reply.clone())
    }
}
