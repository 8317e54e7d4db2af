//! Result types for action extraction

use parlor_domain::{ActionSet, LeadDraft};

/// A candidate span found by the structural scanner.
///
/// Byte offsets into the original reply text; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CandidateSpan {
    pub start: usize,
    pub end: usize,
}

/// The outcome of extracting actions from one LLM reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReply {
    /// The reply with action JSON removed and artifacts cleaned up.
    ///
    /// Never empty for a non-empty input: if cleaning erases everything,
    /// this falls back to the original text.
    pub reply_text: String,

    /// Recognized actions, `None` when the reply contained none.
    pub actions: Option<ActionSet>,
}

impl ExtractedReply {
    /// Service slugs to recommend, empty when no recommendation was made.
    pub fn recommended_services(&self) -> &[String] {
        self.actions
            .as_ref()
            .and_then(|a| a.recommend_services.as_deref())
            .unwrap_or(&[])
    }

    /// Whether the reply asked to surface the meeting-booking call to action.
    pub fn show_book_meeting(&self) -> bool {
        self.actions.as_ref().is_some_and(|a| a.book_meeting)
    }

    /// The lead draft to capture, if the reply carried one.
    pub fn lead(&self) -> Option<&LeadDraft> {
        self.actions.as_ref().and_then(|a| a.create_lead.as_ref())
    }
}
