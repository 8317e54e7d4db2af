//! Parlor client implementation.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// One prior turn of the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    /// "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

impl HistoryTurn {
    /// Convenience constructor for a visitor turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Convenience constructor for a chatbot turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Chat request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: &'a [HistoryTurn],
}

/// Chat endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Cleaned reply text for display
    pub reply: String,

    /// Service slugs to render as clickable cards
    pub recommended_services: Vec<String>,

    /// Whether to render the booking call to action
    pub show_book_meeting: bool,

    /// Id of the lead captured this turn, if any
    #[serde(default)]
    pub lead_id: Option<String>,
}

/// One captured lead
#[derive(Debug, Clone, Deserialize)]
pub struct LeadRecord {
    /// Lead id (UUIDv7 string)
    pub id: String,
    /// Capture surface
    pub source: String,
    /// Visitor's name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Company
    pub company: String,
    /// Stated budget
    pub budget: String,
    /// Free-form message
    pub message: String,
    /// Capture time (seconds since Unix epoch)
    pub created_at: u64,
}

#[derive(Debug, Deserialize)]
struct LeadsResponse {
    leads: Vec<LeadRecord>,
}

/// Health endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,
    /// Total number of captured leads
    pub leads_captured: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Async client for the Parlor server's HTTP API
pub struct ParlorClient {
    base_url: String,
    http: reqwest::Client,
}

impl ParlorClient {
    /// Create a new client for the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// The server base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one chat message with optional conversation history
    pub async fn chat(
        &self,
        message: &str,
        history: &[HistoryTurn],
    ) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/chat", self.base_url);
        let body = ChatRequest { message, history };

        let response = self.http.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    /// List captured leads, newest first
    pub async fn list_leads(
        &self,
        source: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<LeadRecord>, ClientError> {
        let url = format!("{}/leads", self.base_url);

        let mut request = self.http.get(&url);
        if let Some(source) = source {
            request = request.query(&[("source", source)]);
        }
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        let response = request.send().await?;
        let listing: LeadsResponse = Self::decode(response).await?;
        Ok(listing.leads)
    }

    /// Check server health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// Decode a response body, turning error statuses into `ClientError::Api`
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))
        } else {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "no error detail".to_string(),
            };
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ParlorClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_history_constructors() {
        let turn = HistoryTurn::user("hi");
        assert_eq!(turn.role, "user");
        let turn = HistoryTurn::assistant("hello");
        assert_eq!(turn.role, "assistant");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_http_error() {
        let client = ParlorClient::new("http://127.0.0.1:9");
        let result = client.health().await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }

    // Integration test (requires a running server)
    #[tokio::test]
    #[ignore]
    async fn test_chat_integration() {
        let client = ParlorClient::new("http://localhost:8080");
        let response = client.chat("hello", &[]).await.unwrap();
        assert!(!response.reply.is_empty());
    }
}
