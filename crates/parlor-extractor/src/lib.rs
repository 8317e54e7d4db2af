//! Parlor Action Extractor
//!
//! Turns one raw LLM reply into clean prose plus a typed action set.
//!
//! # Overview
//!
//! The chatbot's system prompt instructs the model to embed actions —
//! create a lead, recommend services, book a meeting — as JSON objects on
//! their own lines inside its reply. This crate owns both ends of that
//! protocol: the prompt that asks for it ([`PromptBuilder`]) and the
//! extractor that recognizes it ([`ActionExtractor`]).
//!
//! # Architecture
//!
//! ```text
//! reply text → balanced-brace scan → parse/classify → span deletion
//!            → booking-link scrub → whitespace normalization → ExtractedReply
//! ```
//!
//! One structural scan finds every top-level `{...}` span containing the
//! key `"action"`; each candidate is parsed and classified, and every span
//! that parses is deleted from the prose in a single pass over the
//! original string. Two named finishing steps — the booking-link scrub and
//! whitespace normalization — tidy what the model wrote around the JSON.
//!
//! # Key Properties
//!
//! - **Never fails**: a malformed candidate is logged and skipped; the
//!   worst case is the original text with some actions undetected.
//! - **Never empty**: if cleaning would erase the whole reply, the
//!   original text is returned instead.
//! - **Last one wins**: at most one action of each kind survives a reply.
//! - **Pure**: no I/O, no shared state; diagnostics go to `tracing`.
//!
//! # Example Usage
//!
//! ```
//! use parlor_extractor::{ActionExtractor, ExtractorConfig};
//!
//! let extractor = ActionExtractor::new(ExtractorConfig::default());
//!
//! let reply = extractor.extract(
//!     "Here are our services:\n{\"action\": \"recommend_services\", \"services\": [\"seo\"]}",
//! );
//!
//! assert_eq!(reply.reply_text, "Here are our services:");
//! assert_eq!(reply.recommended_services(), ["seo".to_string()]);
//! ```

#![warn(missing_docs)]

mod cleanup;
mod config;
mod extractor;
mod parser;
mod prompt;
mod scanner;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use extractor::ActionExtractor;
pub use prompt::PromptBuilder;
pub use types::ExtractedReply;
