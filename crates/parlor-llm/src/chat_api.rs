//! Hosted chat-completions provider
//!
//! Talks to an OpenAI-style `/chat/completions` endpoint. Any host that
//! speaks that wire format works by pointing the endpoint elsewhere.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint, model, and API key
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use parlor_llm::ChatApiProvider;
//!
//! let provider = ChatApiProvider::new(
//!     "https://api.openai.com/v1",
//!     "gpt-4o-mini",
//!     "sk-...",
//! );
//! // The complete method is async; use it in an async context or through
//! // the LlmProvider trait's sync wrapper.
//! ```

use crate::LlmError;
use parlor_domain::traits::LlmProvider as LlmProviderTrait;
use parlor_domain::ChatTurn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat-completions API provider
///
/// Sends the system prompt plus conversation turns and returns the
/// assistant's reply text verbatim (action JSON included, for the
/// extractor to deal with).
pub struct ChatApiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// One message of a chat-completions request
#[derive(Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ApiMessage>,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: String,
}

impl ChatApiProvider {
    /// Create a new chat-completions provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.openai.com/v1")
    /// - `model`: model name (e.g., "gpt-4o-mini")
    /// - `api_key`: bearer token for the API
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider against the default endpoint
    pub fn default_endpoint(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model, api_key)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Produce the assistant's reply for the given conversation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API is unreachable after retries
    /// - the API key is missing or rejected
    /// - the model does not exist
    /// - the response shape is invalid
    pub async fn complete(
        &self,
        system_prompt: &str,
        turns: &[ChatTurn],
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(ApiMessage {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        for turn in turns {
            messages.push(ApiMessage {
                role: turn.role.as_str().to_string(),
                content: turn.content.clone(),
            });
        }

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        // Retry with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.json::<ChatCompletionResponse>().await {
                            Ok(completion) => {
                                return completion
                                    .choices
                                    .into_iter()
                                    .next()
                                    .map(|c| c.message.content)
                                    .ok_or_else(|| {
                                        LlmError::InvalidResponse(
                                            "Response contained no choices".to_string(),
                                        )
                                    });
                            }
                            Err(e) => {
                                return Err(LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if status == reqwest::StatusCode::UNAUTHORIZED
                        || status == reqwest::StatusCode::FORBIDDEN
                    {
                        return Err(LlmError::Auth(format!("HTTP {}", status)));
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for ChatApiProvider {
    type Error = LlmError;

    fn complete(&self, system_prompt: &str, turns: &[ChatTurn]) -> Result<String, Self::Error> {
        // Blocking wrapper for the async method; callers on an async
        // runtime should reach it through spawn_blocking.
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to create runtime: {}", e)))?
            .block_on(async { self.complete(system_prompt, turns).await })
    }
}
