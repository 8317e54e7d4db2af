//! HTTP request handlers for the chatbot service.
//!
//! Implements the chat endpoint, the captured-leads listing, and the
//! health check using axum.

use crate::chat::{ChatError, ChatService};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use parlor_domain::traits::{LeadQuery, LeadStore, LlmProvider};
use parlor_domain::{ChatRole, ChatTurn, Lead, LeadSource};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Shared application state
pub struct AppState<L, S>
where
    L: LlmProvider,
    S: LeadStore,
{
    /// The chat turn pipeline
    pub chat: Arc<ChatService<L, S>>,
    /// Lead store, shared with the chat pipeline
    pub store: Arc<Mutex<S>>,
}

impl<L, S> Clone for AppState<L, S>
where
    L: LlmProvider,
    S: LeadStore,
{
    fn clone(&self) -> Self {
        Self {
            chat: Arc::clone(&self.chat),
            store: Arc::clone(&self.store),
        }
    }
}

/// Chat endpoint request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The visitor's message
    pub message: String,

    /// Conversation so far, oldest first
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
}

/// One prior turn of the conversation as sent by the page layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    /// "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

impl From<HistoryTurn> for ChatTurn {
    fn from(turn: HistoryTurn) -> Self {
        let role = match turn.role.as_str() {
            "assistant" => ChatRole::Assistant,
            _ => ChatRole::User,
        };
        ChatTurn {
            role,
            content: turn.content,
        }
    }
}

/// Chat endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Cleaned reply text for display
    pub reply: String,

    /// Service slugs to render as clickable cards
    pub recommended_services: Vec<String>,

    /// Whether to render the booking call to action
    pub show_book_meeting: bool,

    /// Id of the lead captured this turn, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
}

/// Query parameters for the leads listing
#[derive(Debug, Default, Deserialize)]
pub struct LeadsParams {
    /// Filter by capture surface
    pub source: Option<String>,
    /// Maximum results
    pub limit: Option<usize>,
}

/// One captured lead on the wire
#[derive(Debug, Serialize, Deserialize)]
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

impl From<Lead> for LeadRecord {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.to_string(),
            source: lead.source.as_str().to_string(),
            name: lead.draft.name,
            email: lead.draft.email,
            phone: lead.draft.phone,
            company: lead.draft.company,
            budget: lead.draft.budget,
            message: lead.draft.message,
            created_at: lead.created_at,
        }
    }
}

/// Leads listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadsResponse {
    /// Captured leads, newest first
    pub leads: Vec<LeadRecord>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Total number of captured leads
    pub leads_captured: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Chat pipeline error (LLM upstream)
    Chat(ChatError),
    /// Lead store error
    Store(String),
    /// Invalid query parameter
    InvalidQuery(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Chat(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

/// POST /chat - Handle one chatbot turn
async fn chat_turn<L, S>(
    State(state): State<AppState<L, S>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
    S: LeadStore + Send + 'static,
    L::Error: std::fmt::Display,
    S::Error: std::fmt::Display,
{
    let history: Vec<ChatTurn> = request.history.into_iter().map(Into::into).collect();

    let outcome = state.chat.handle_turn(request.message, history).await?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        recommended_services: outcome.recommended_services,
        show_book_meeting: outcome.show_book_meeting,
        lead_id: outcome.lead_id.map(|id| id.to_string()),
    }))
}

/// GET /leads - List captured leads, newest first
async fn list_leads<L, S>(
    State(state): State<AppState<L, S>>,
    Query(params): Query<LeadsParams>,
) -> Result<Json<LeadsResponse>, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
    S: LeadStore + Send + 'static,
    S::Error: std::fmt::Display,
{
    let source = match params.source.as_deref() {
        Some(s) => Some(LeadSource::parse(s).map_err(AppError::InvalidQuery)?),
        None => None,
    };

    let query = LeadQuery {
        source,
        limit: params.limit,
    };

    let leads = {
        let store = state
            .store
            .lock()
            .map_err(|e| AppError::Store(format!("Store lock error: {}", e)))?;
        store
            .list_leads(&query)
            .map_err(|e| AppError::Store(e.to_string()))?
    };

    Ok(Json(LeadsResponse {
        leads: leads.into_iter().map(Into::into).collect(),
    }))
}

/// GET /health - Liveness plus store reachability
async fn health_check<L, S>(
    State(state): State<AppState<L, S>>,
) -> Result<Json<HealthCheckResponse>, AppError>
where
    L: LlmProvider + Send + Sync + 'static,
    S: LeadStore + Send + 'static,
    S::Error: std::fmt::Display,
{
    let leads_captured = {
        let store = state
            .store
            .lock()
            .map_err(|e| AppError::Store(format!("Store lock error: {}", e)))?;
        store
            .count_leads()
            .map_err(|e| AppError::Store(e.to_string()))?
    };

    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        leads_captured,
    }))
}

/// Create the axum router with all routes
pub fn create_router<L, S>(state: AppState<L, S>) -> AxumRouter
where
    L: LlmProvider + Send + Sync + 'static,
    S: LeadStore + Send + 'static,
    L::Error: std::fmt::Display,
    S::Error: std::fmt::Display,
{
    AxumRouter::new()
        .route("/chat", post(chat_turn::<L, S>))
        .route("/leads", get(list_leads::<L, S>))
        .route("/health", get(health_check::<L, S>))
        .with_state(state)
}
