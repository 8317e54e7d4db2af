//! Integration tests for the chatbot HTTP service

use axum::body::Body;
use axum::http::{Request, StatusCode};
use parlor_extractor::{ActionExtractor, ExtractorConfig};
use parlor_llm::MockProvider;
use parlor_server::chat::ChatService;
use parlor_server::handlers::{
    create_router, AppState, ChatResponse, ErrorResponse, HealthCheckResponse, LeadsResponse,
};
use parlor_store::SqliteLeadStore;
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for oneshot

fn test_state(provider: MockProvider) -> AppState<MockProvider, SqliteLeadStore> {
    let store = Arc::new(Mutex::new(SqliteLeadStore::new(":memory:").unwrap()));
    let chat = Arc::new(ChatService::new(
        provider,
        Arc::clone(&store),
        ActionExtractor::new(ExtractorConfig::default()),
        "You are the agency assistant.".to_string(),
    ));
    AppState { chat, store }
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_router(test_state(MockProvider::new("hi")));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = body_json(response).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.leads_captured, 0);
}

#[tokio::test]
async fn test_plain_chat_turn() {
    let app = create_router(test_state(MockProvider::new("Happy to help!")));

    let response = app
        .oneshot(chat_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat: ChatResponse = body_json(response).await;
    assert_eq!(chat.reply, "Happy to help!");
    assert!(chat.recommended_services.is_empty());
    assert!(!chat.show_book_meeting);
    assert!(chat.lead_id.is_none());
}

#[tokio::test]
async fn test_chat_turn_with_recommendation() {
    let mut provider = MockProvider::default();
    provider.add_response(
        "what do you offer?",
        "Take a look:\n{\"action\": \"recommend_services\", \"services\": [\"seo\", \"web-dev\"]}",
    );
    let app = create_router(test_state(provider));

    let response = app
        .oneshot(chat_request(r#"{"message": "what do you offer?"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat: ChatResponse = body_json(response).await;
    assert_eq!(chat.reply, "Take a look:");
    assert_eq!(chat.recommended_services, vec!["seo", "web-dev"]);
}

#[tokio::test]
async fn test_chat_turn_with_history() {
    let mut provider = MockProvider::default();
    provider.add_response("and seo?", "We do that too.");
    let app = create_router(test_state(provider));

    let body = r#"{
        "message": "and seo?",
        "history": [
            {"role": "user", "content": "do you build sites?"},
            {"role": "assistant", "content": "We do."}
        ]
    }"#;

    let response = app.oneshot(chat_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat: ChatResponse = body_json(response).await;
    assert_eq!(chat.reply, "We do that too.");
}

#[tokio::test]
async fn test_lead_capture_end_to_end() {
    let mut provider = MockProvider::default();
    provider.add_response(
        "I'm Jane, jane@x.com",
        "Thanks! {\"action\":\"create_lead\",\"lead\":{\"name\":\"Jane\",\"email\":\"jane@x.com\"}} We'll reach out.",
    );
    let state = test_state(provider);
    let app = create_router(state.clone());

    let response = app
        .clone()
        .oneshot(chat_request(r#"{"message": "I'm Jane, jane@x.com"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chat: ChatResponse = body_json(response).await;
    assert!(chat.lead_id.is_some());
    assert!(!chat.reply.contains("create_lead"));

    // The captured lead shows up in the listing, newest first
    let request = Request::builder()
        .uri("/leads?source=chatbot")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listing: LeadsResponse = body_json(response).await;
    assert_eq!(listing.leads.len(), 1);
    assert_eq!(listing.leads[0].name, "Jane");
    assert_eq!(listing.leads[0].email, "jane@x.com");
    assert_eq!(listing.leads[0].source, "chatbot");
}

#[tokio::test]
async fn test_booking_reply_sets_flag() {
    let mut provider = MockProvider::default();
    provider.add_response(
        "can we talk?",
        "Of course! {\"action\": \"book_meeting\"} Pick any slot that suits you.",
    );
    let app = create_router(test_state(provider));

    let response = app
        .oneshot(chat_request(r#"{"message": "can we talk?"}"#))
        .await
        .unwrap();

    let chat: ChatResponse = body_json(response).await;
    assert!(chat.show_book_meeting);
    assert_eq!(chat.reply, "Of course! Pick any slot that suits you.");
}

#[tokio::test]
async fn test_leads_listing_rejects_unknown_source() {
    let app = create_router(test_state(MockProvider::new("hi")));

    let request = Request::builder()
        .uri("/leads?source=carrier_pigeon")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = body_json(response).await;
    assert!(error.error.contains("Unknown lead source"));
}

#[tokio::test]
async fn test_llm_failure_maps_to_bad_gateway() {
    let mut provider = MockProvider::default();
    provider.add_error("boom");
    let app = create_router(test_state(provider));

    let response = app
        .oneshot(chat_request(r#"{"message": "boom"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
