//! Core ActionExtractor implementation

use crate::cleanup;
use crate::config::ExtractorConfig;
use crate::parser::{classify_candidate, Classified};
use crate::scanner::find_candidate_spans;
use crate::types::{CandidateSpan, ExtractedReply};
use parlor_domain::{ActionSet, ChatAction};
use tracing::debug;

/// Turns one raw LLM reply into clean prose plus a typed action set.
///
/// The extractor is pure and stateless between calls: it holds only its
/// configuration, performs no I/O, and never returns an error. See the
/// crate docs for the pipeline stages.
pub struct ActionExtractor {
    config: ExtractorConfig,
}

impl ActionExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract actions from a raw LLM reply.
    ///
    /// Runs the structural scan, classifies every candidate, deletes the
    /// spans that parsed in one pass over the original string, then applies
    /// the booking-link scrub and whitespace normalization. If cleaning
    /// would leave nothing, the original text is returned unmodified.
    pub fn extract(&self, response_text: &str) -> ExtractedReply {
        let mut actions = ActionSet::default();
        let mut deletions: Vec<CandidateSpan> = Vec::new();

        for span in find_candidate_spans(response_text) {
            let raw = &response_text[span.start..span.end];
            match classify_candidate(raw) {
                Some(Classified::Action(action)) => {
                    actions.record(action);
                    deletions.push(span);
                }
                Some(Classified::Unrecognized) => {
                    // Parsed fine but not one of ours: the span still
                    // leaves the prose.
                    deletions.push(span);
                }
                None => {
                    // Parse failure: the span stays in the text.
                }
            }
        }

        debug!(
            "Action scan: {} candidate span(s) deleted, actions empty: {}",
            deletions.len(),
            actions.is_empty()
        );

        let without_actions = remove_spans(response_text, &deletions);

        let (scrubbed, forced_booking) =
            cleanup::scrub_booking_link(&without_actions, &self.config.booking_link);
        if forced_booking {
            actions.record(ChatAction::BookMeeting);
        }

        let cleaned = cleanup::normalize_whitespace(&scrubbed);

        let reply_text = if cleaned.is_empty() {
            response_text.to_string()
        } else {
            cleaned
        };

        ExtractedReply {
            reply_text,
            actions: actions.into_option(),
        }
    }
}

/// Rebuild the text from the complement of the deleted spans.
///
/// Spans come from a single left-to-right scan, so they are ordered and
/// non-overlapping.
fn remove_spans(text: &str, spans: &[CandidateSpan]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_spans_complement() {
        let text = "abc<DEL>def<DEL>ghi";
        let spans = [
            CandidateSpan { start: 3, end: 8 },
            CandidateSpan { start: 11, end: 16 },
        ];
        assert_eq!(remove_spans(text, &spans), "abcdefghi");
    }

    #[test]
    fn test_remove_spans_none() {
        assert_eq!(remove_spans("unchanged", &[]), "unchanged");
    }

    #[test]
    fn test_remove_spans_whole_string() {
        let text = "{}";
        let spans = [CandidateSpan { start: 0, end: 2 }];
        assert_eq!(remove_spans(text, &spans), "");
    }
}
