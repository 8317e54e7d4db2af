//! Parlor Domain Layer
//!
//! This crate contains the core vocabulary of Parlor, the conversational
//! lead-capture service. It stays dependency-light and defines the value
//! objects and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **ChatAction**: a structured instruction embedded by the LLM in its
//!   reply text (create a lead, recommend services, book a meeting)
//! - **ActionSet**: the actions recognized in one reply, folded by kind
//!   with last-one-wins semantics
//! - **Lead**: a prospective-customer contact record, whichever surface
//!   captured it (chatbot, contact form, quote request, job application)
//! - **ChatTurn**: one message of a conversation as sent to the LLM
//!
//! ## Architecture
//!
//! - Pure business types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod chat;
pub mod lead;
pub mod traits;

// Re-exports for convenience
pub use action::{ActionSet, ChatAction};
pub use chat::{ChatRole, ChatTurn};
pub use lead::{Lead, LeadDraft, LeadId, LeadSource};
