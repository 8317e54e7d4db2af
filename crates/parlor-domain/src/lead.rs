//! Lead records - the unit of value the chatbot and site forms produce

use std::fmt;

/// Unique identifier for a lead based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability, so "newest leads first" is an id sort
/// - 128-bit uniqueness with no coordination between capture surfaces
/// - RFC 9562-standard format with broad ecosystem support
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadId(u128);

impl LeadId {
    /// Generate a new UUIDv7-based LeadId
    ///
    /// # Examples
    ///
    /// ```
    /// use parlor_domain::LeadId;
    ///
    /// let id = LeadId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a LeadId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a LeadId from a UUIDv7 string
    ///
    /// # Examples
    ///
    /// ```
    /// use parlor_domain::LeadId;
    ///
    /// let id = LeadId::new();
    /// let parsed = LeadId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for LeadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// The surface that captured a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadSource {
    /// The AI chatbot's `create_lead` action
    Chatbot,
    /// The general contact form
    ContactForm,
    /// The quote-request form
    QuoteRequest,
    /// The job-application form
    JobApplication,
}

impl LeadSource {
    /// Stable string form, used by the storage layer and wire formats
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Chatbot => "chatbot",
            LeadSource::ContactForm => "contact_form",
            LeadSource::QuoteRequest => "quote_request",
            LeadSource::JobApplication => "job_application",
        }
    }

    /// Parse the stable string form back into a source
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "chatbot" => Ok(LeadSource::Chatbot),
            "contact_form" => Ok(LeadSource::ContactForm),
            "quote_request" => Ok(LeadSource::QuoteRequest),
            "job_application" => Ok(LeadSource::JobApplication),
            _ => Err(format!("Unknown lead source: {}", s)),
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The contact fields of a lead as the chatbot collects them.
///
/// Every field is optional from the visitor's point of view; absent fields
/// are carried as empty strings so downstream consumers never deal with
/// null-vs-missing distinctions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    /// Visitor's name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Company the visitor represents
    pub company: String,
    /// Stated budget, free-form
    pub budget: String,
    /// Free-form message or project description
    pub message: String,
}

impl LeadDraft {
    /// True when the visitor supplied no contact information at all.
    ///
    /// The store still accepts such drafts; callers use this to decide
    /// whether persisting is worthwhile.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.company.is_empty()
            && self.budget.is_empty()
            && self.message.is_empty()
    }
}

/// A captured lead.
///
/// Leads are immutable once created; follow-ups happen outside this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    /// Unique identifier
    pub id: LeadId,

    /// Which surface captured the lead
    pub source: LeadSource,

    /// Contact fields, absent ones carried as empty strings
    pub draft: LeadDraft,

    /// When this lead was captured (seconds since Unix epoch)
    pub created_at: u64,
}

impl Lead {
    /// Build a lead from a draft captured by the given surface.
    pub fn from_draft(draft: LeadDraft, source: LeadSource, created_at: u64) -> Self {
        Self {
            id: LeadId::new(),
            source,
            draft,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_id_uniqueness() {
        let a = LeadId::new();
        let b = LeadId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_lead_id_string_round_trip() {
        let id = LeadId::new();
        let parsed = LeadId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_lead_id_rejects_garbage() {
        assert!(LeadId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_lead_id_timestamp_is_recent() {
        let id = LeadId::new();
        // Sanity bound: after 2020-01-01 in milliseconds
        assert!(id.timestamp() > 1_577_836_800_000);
    }

    #[test]
    fn test_source_round_trip() {
        for source in [
            LeadSource::Chatbot,
            LeadSource::ContactForm,
            LeadSource::QuoteRequest,
            LeadSource::JobApplication,
        ] {
            assert_eq!(LeadSource::parse(source.as_str()).unwrap(), source);
        }
    }

    #[test]
    fn test_source_rejects_unknown() {
        assert!(LeadSource::parse("carrier_pigeon").is_err());
    }

    #[test]
    fn test_blank_draft() {
        assert!(LeadDraft::default().is_blank());

        let mut draft = LeadDraft::default();
        draft.email = "jane@example.com".to_string();
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_lead_from_draft() {
        let mut draft = LeadDraft::default();
        draft.name = "Jane".to_string();

        let lead = Lead::from_draft(draft.clone(), LeadSource::Chatbot, 1_700_000_000);
        assert_eq!(lead.source, LeadSource::Chatbot);
        assert_eq!(lead.draft, draft);
        assert_eq!(lead.created_at, 1_700_000_000);
    }
}
