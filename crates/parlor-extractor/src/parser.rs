//! Parse and classify candidate spans into chat actions

use parlor_domain::{ChatAction, LeadDraft};
use serde_json::Value;
use tracing::warn;

/// What a candidate span turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classified {
    /// One of the three recognized action kinds
    Action(ChatAction),

    /// Valid JSON, but not an action we know; the span is still deleted
    /// from the prose
    Unrecognized,
}

/// Parse a candidate span as strict JSON and classify its `action` field.
///
/// Returns `None` on parse failure: the failure is per-candidate and
/// non-fatal, and the caller leaves the span in the text. Unknown action
/// values and malformed payload shapes are not errors; they classify as
/// [`Classified::Unrecognized`] with a warning, so a model drifting from
/// the protocol shows up in the logs instead of vanishing silently.
pub(crate) fn classify_candidate(raw: &str) -> Option<Classified> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Skipping unparsable action candidate: {}", e);
            return None;
        }
    };

    let kind = match value.get("action").and_then(Value::as_str) {
        Some(kind) => kind.to_string(),
        None => {
            warn!("Action candidate has no string-valued 'action' field");
            return Some(Classified::Unrecognized);
        }
    };

    let classified = match kind.as_str() {
        "create_lead" => match value.get("lead").and_then(Value::as_object) {
            Some(lead) => {
                let draft = LeadDraft {
                    name: string_field(lead, "name"),
                    email: string_field(lead, "email"),
                    phone: string_field(lead, "phone"),
                    company: string_field(lead, "company"),
                    budget: string_field(lead, "budget"),
                    message: string_field(lead, "message"),
                };
                Classified::Action(ChatAction::CreateLead(draft))
            }
            None => {
                warn!("create_lead action without an object-valued 'lead' payload");
                Classified::Unrecognized
            }
        },

        "recommend_services" => match value.get("services").and_then(Value::as_array) {
            Some(services) => {
                let slugs: Vec<String> = services
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect();
                Classified::Action(ChatAction::RecommendServices(slugs))
            }
            None => {
                warn!("recommend_services action without an array-valued 'services' payload");
                Classified::Unrecognized
            }
        },

        "book_meeting" => Classified::Action(ChatAction::BookMeeting),

        other => {
            warn!("Unrecognized action type: {}", other);
            Classified::Unrecognized
        }
    };

    Some(classified)
}

/// Read a string field from the lead payload, defaulting to `""` when the
/// field is missing or not a string.
fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
