//! System prompt engineering for the chatbot's action protocol

/// Builds the system prompt that teaches the model the action protocol.
pub struct PromptBuilder {
    services: Vec<String>,
    booking_link: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given service catalog.
    pub fn new(services: Vec<String>) -> Self {
        Self {
            services,
            booking_link: String::new(),
        }
    }

    /// Mention the booking link so the model offers meetings by action
    /// instead of pasting the URL into prose.
    pub fn with_booking_link(mut self, booking_link: impl Into<String>) -> Self {
        self.booking_link = booking_link.into();
        self
    }

    /// Build the complete system prompt.
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(CHAT_INSTRUCTIONS);
        prompt.push_str("\n\n");

        if !self.services.is_empty() {
            prompt.push_str("Services you may recommend, by slug:\n");
            for slug in &self.services {
                prompt.push_str(&format!("- {}\n", slug));
            }
            prompt.push('\n');
        }

        if !self.booking_link.is_empty() {
            prompt.push_str(
                "When a visitor wants to talk to a human, emit the book_meeting action. \
                 Never paste the scheduling URL into your reply; the page renders its own \
                 booking button.\n\n",
            );
        }

        prompt.push_str(ACTION_FORMAT_REMINDER);

        prompt
    }
}

const CHAT_INSTRUCTIONS: &str = r#"You are the assistant on a digital-services agency's website.
You answer questions about the agency's services, portfolio, and process,
recommend services that fit the visitor's needs, and collect contact details
from visitors who want to work with us.

When the conversation calls for it, embed an action in your reply as a JSON
object on its own line:

{"action": "recommend_services", "services": ["slug-a", "slug-b"]}
{"action": "create_lead", "lead": {"name": "", "email": "", "phone": "", "company": "", "budget": "", "message": ""}}
{"action": "book_meeting"}

Rules:
- Emit at most one action of each kind per reply
- Only include lead fields the visitor actually provided
- Recommend services only from the catalog below, by slug
- Keep the prose around an action natural; the JSON is removed before display"#;

const ACTION_FORMAT_REMINDER: &str = r#"Remember: each action must be a single JSON object on its own line, with an
"action" field naming one of: create_lead, recommend_services, book_meeting.
Text outside the JSON is shown to the visitor verbatim."#;
