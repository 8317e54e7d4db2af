//! The chatbot turn pipeline.
//!
//! One inbound message flows: prompt → LLM → action extraction →
//! best-effort lead capture → response. The LLM call and the lead insert
//! are the only suspension points, both sequential.

use parlor_domain::traits::{LeadStore, LlmProvider};
use parlor_domain::{ChatTurn, Lead, LeadDraft, LeadId, LeadSource};
use parlor_extractor::ActionExtractor;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors a chat turn can surface to the caller.
///
/// Lead-store failures are deliberately absent: persistence is
/// best-effort and never fails the turn.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The LLM provider failed after retries
    #[error("LLM error: {0}")]
    Llm(String),
}

/// What one chat turn produced, ready for the wire.
#[derive(Debug, Clone)]
pub struct ChatTurnOutcome {
    /// Cleaned reply text for display
    pub reply: String,

    /// Service slugs the page layer should render as cards
    pub recommended_services: Vec<String>,

    /// Whether the page layer should render the booking call to action
    pub show_book_meeting: bool,

    /// Id of the lead captured this turn, if any
    pub lead_id: Option<LeadId>,
}

/// Drives one chatbot conversation turn end to end.
pub struct ChatService<L, S>
where
    L: LlmProvider,
    S: LeadStore,
{
    provider: Arc<L>,
    store: Arc<Mutex<S>>,
    extractor: ActionExtractor,
    system_prompt: String,
}

impl<L, S> ChatService<L, S>
where
    L: LlmProvider + Send + Sync + 'static,
    S: LeadStore + Send + 'static,
    L::Error: std::fmt::Display,
    S::Error: std::fmt::Display,
{
    /// Create a new chat service.
    pub fn new(
        provider: L,
        store: Arc<Mutex<S>>,
        extractor: ActionExtractor,
        system_prompt: String,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            store,
            extractor,
            system_prompt,
        }
    }

    /// Handle one visitor message.
    ///
    /// `history` is the conversation so far, oldest first, not including
    /// the new message.
    pub async fn handle_turn(
        &self,
        message: String,
        history: Vec<ChatTurn>,
    ) -> Result<ChatTurnOutcome, ChatError> {
        let mut turns = history;
        turns.push(ChatTurn::user(message));

        let llm_reply = self.call_llm(turns).await?;
        debug!("LLM reply length: {} chars", llm_reply.len());

        let extracted = self.extractor.extract(&llm_reply);

        let lead_id = match extracted.lead() {
            Some(draft) if !draft.is_blank() => self.capture_lead(draft.clone()),
            Some(_) => {
                debug!("Ignoring blank lead draft");
                None
            }
            None => None,
        };

        Ok(ChatTurnOutcome {
            reply: extracted.reply_text.clone(),
            recommended_services: extracted.recommended_services().to_vec(),
            show_book_meeting: extracted.show_book_meeting(),
            lead_id,
        })
    }

    /// Call the LLM provider.
    async fn call_llm(&self, turns: Vec<ChatTurn>) -> Result<String, ChatError> {
        let provider = Arc::clone(&self.provider);
        let system_prompt = self.system_prompt.clone();

        // The provider trait is sync, so call it off the async runtime
        tokio::task::spawn_blocking(move || {
            provider
                .complete(&system_prompt, &turns)
                .map_err(|e| ChatError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ChatError::Llm(format!("Task join error: {}", e)))?
    }

    /// Persist a captured lead, best effort.
    ///
    /// A store failure is logged and swallowed; the visitor still gets
    /// their reply.
    fn capture_lead(&self, draft: LeadDraft) -> Option<LeadId> {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let lead = Lead::from_draft(draft, LeadSource::Chatbot, created_at);

        let mut store = match self.store.lock() {
            Ok(store) => store,
            Err(e) => {
                warn!("Lead store lock poisoned, dropping lead: {}", e);
                return None;
            }
        };

        match store.insert_lead(lead) {
            Ok(id) => {
                info!("Captured chatbot lead {}", id);
                Some(id)
            }
            Err(e) => {
                warn!("Lead insert failed, continuing without capture: {}", e);
                None
            }
        }
    }
}
