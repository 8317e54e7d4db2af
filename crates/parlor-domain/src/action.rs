//! Actions the LLM can embed in a chat reply

use crate::lead::LeadDraft;

/// A structured instruction embedded by the LLM in its reply text.
///
/// The model is prompted to emit each action as a JSON object on its own
/// line; the extractor recognizes exactly these three kinds and ignores
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Capture a prospective-customer contact record
    CreateLead(LeadDraft),

    /// Surface a set of service slugs for the page layer to render
    RecommendServices(Vec<String>),

    /// Prompt the visitor with a meeting-booking call to action
    BookMeeting,
}

/// The actions recognized in one reply, folded by kind.
///
/// At most one action of each kind survives per reply: recording a second
/// `CreateLead` or `RecommendServices` overwrites the earlier one, and
/// `BookMeeting` is a flag. This makes the "last one wins" rule explicit
/// rather than a side effect of key overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSet {
    /// Lead draft from the most recent `create_lead` action, if any
    pub create_lead: Option<LeadDraft>,

    /// Service slugs from the most recent `recommend_services` action, if any
    pub recommend_services: Option<Vec<String>>,

    /// Whether any `book_meeting` action (or the booking link) was seen
    pub book_meeting: bool,
}

impl ActionSet {
    /// Fold an action into the set, replacing any earlier action of the
    /// same kind.
    pub fn record(&mut self, action: ChatAction) {
        match action {
            ChatAction::CreateLead(draft) => self.create_lead = Some(draft),
            ChatAction::RecommendServices(slugs) => self.recommend_services = Some(slugs),
            ChatAction::BookMeeting => self.book_meeting = true,
        }
    }

    /// True when no action of any kind has been recorded.
    pub fn is_empty(&self) -> bool {
        self.create_lead.is_none() && self.recommend_services.is_none() && !self.book_meeting
    }

    /// Convert into `None` when empty, so callers can distinguish "no
    /// actions" from an action set without inspecting every field.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
