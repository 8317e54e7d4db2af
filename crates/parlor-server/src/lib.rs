//! Parlor Server
//!
//! The agency website's chatbot endpoint: answers visitor questions
//! through a hosted LLM, extracts embedded actions from every reply, and
//! captures leads on a best-effort basis.

#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod handlers;

use chat::ChatService;
use config::ServerConfig;
use handlers::{create_router, AppState};
use parlor_extractor::{ActionExtractor, ExtractorConfig, PromptBuilder};
use parlor_llm::ChatApiProvider;
use parlor_store::SqliteLeadStore;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// API key environment variable not set
    #[error("API key environment variable not set: {0}")]
    MissingApiKey(String),

    /// Lead store error
    #[error("Lead store error: {0}")]
    Store(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the chatbot HTTP server
///
/// Builds the LLM provider, the lead store, and the chat pipeline from
/// configuration, then serves until interrupted.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Parlor server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.llm.model);
    info!("Service catalog: {} slug(s)", config.services.len());

    let api_key = std::env::var(&config.llm.api_key_env)
        .map_err(|_| ServerError::MissingApiKey(config.llm.api_key_env.clone()))?;

    let provider = ChatApiProvider::new(&config.llm.endpoint, &config.llm.model, api_key);

    let store = SqliteLeadStore::new(&config.store.path)
        .map_err(|e| ServerError::Store(e.to_string()))?;
    let store = Arc::new(Mutex::new(store));

    let system_prompt = PromptBuilder::new(config.services.clone())
        .with_booking_link(&config.booking_link)
        .build();
    let extractor = ActionExtractor::new(ExtractorConfig::with_booking_link(&config.booking_link));

    let chat = Arc::new(ChatService::new(
        provider,
        Arc::clone(&store),
        extractor,
        system_prompt,
    ));

    let state = AppState { chat, store };
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Parlor server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
