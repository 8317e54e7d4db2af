//! Parlor Client SDK
//!
//! Thin async HTTP client for the Parlor chatbot server. Used by the CLI
//! and by anything else that wants to drive a conversation or read the
//! captured leads programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use parlor_client::ParlorClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ParlorClient::new("http://localhost:8080");
//!
//! let response = client.chat("What services do you offer?", &[]).await?;
//! println!("{}", response.reply);
//! for slug in &response.recommended_services {
//!     println!("recommended: {}", slug);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;

pub use client::{
    ChatResponse, HealthResponse, HistoryTurn, LeadRecord, ParlorClient,
};
pub use error::ClientError;
