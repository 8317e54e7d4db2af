//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::chat::ChatTurn;
use crate::lead::{Lead, LeadId, LeadSource};

/// Trait for LLM chat-completion operations
///
/// Implemented by the infrastructure layer (parlor-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Produce the assistant's next reply given the system prompt and the
    /// conversation so far (ending with the visitor's latest turn)
    fn complete(&self, system_prompt: &str, turns: &[ChatTurn]) -> Result<String, Self::Error>;
}

/// Trait for persisting and retrieving leads
///
/// Implemented by the infrastructure layer (parlor-store)
pub trait LeadStore {
    /// Error type for store operations
    type Error;

    /// Persist a new lead
    fn insert_lead(&mut self, lead: Lead) -> Result<LeadId, Self::Error>;

    /// Get a lead by id
    fn get_lead(&self, id: LeadId) -> Result<Option<Lead>, Self::Error>;

    /// Query leads matching criteria, newest first
    fn list_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>, Self::Error>;

    /// Count all captured leads
    fn count_leads(&self) -> Result<usize, Self::Error>;
}

/// Query criteria for retrieving leads
#[derive(Debug, Clone, Default)]
pub struct LeadQuery {
    /// Filter by capture surface
    pub source: Option<LeadSource>,

    /// Maximum results to return
    pub limit: Option<usize>,
}
