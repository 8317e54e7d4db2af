//! Conversation types shared between the server and the LLM layer

/// Who authored a turn of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// The site visitor
    User,
    /// The chatbot
    Assistant,
}

impl ChatRole {
    /// Stable string form, matching chat-completion API conventions
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message of a conversation as sent to the LLM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Author of the turn
    pub role: ChatRole,
    /// Message text
    pub content: String,
}

impl ChatTurn {
    /// Convenience constructor for a visitor turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Convenience constructor for a chatbot turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
