//! Balanced-brace scan for top-level action JSON spans

use crate::types::CandidateSpan;

/// Find every balanced, top-level `{...}` span whose raw text contains the
/// literal key `"action"`.
///
/// The scan walks the text once, left to right, tracking whether the
/// current position is inside a double-quoted string (honoring backslash
/// escapes, so an escaped quote does not toggle string mode), a brace
/// depth and a bracket depth. A span begins at a `{` seen while both
/// depths are zero and outside any string, and ends at the `}` that
/// returns brace depth to zero. Brackets never begin a span; their depth
/// exists only so array contents are not misread as structure.
///
/// An unterminated `{` at end of input produces no span.
pub(crate) fn find_candidate_spans(text: &str) -> Vec<CandidateSpan> {
    let mut spans = Vec::new();

    let mut in_string = false;
    let mut escaped = false;
    let mut brace_depth: usize = 0;
    let mut bracket_depth: usize = 0;
    let mut span_start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => {
                if brace_depth == 0 && bracket_depth == 0 {
                    span_start = Some(i);
                }
                brace_depth += 1;
            }
            '}' => {
                if brace_depth > 0 {
                    brace_depth -= 1;
                    if brace_depth == 0 {
                        if let Some(start) = span_start.take() {
                            let end = i + ch.len_utf8();
                            if text[start..end].contains("\"action\"") {
                                spans.push(CandidateSpan { start, end });
                            }
                        }
                    }
                }
            }
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            _ => {}
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(text: &str) -> Vec<&str> {
        find_candidate_spans(text)
            .into_iter()
            .map(|s| &text[s.start..s.end])
            .collect()
    }

    #[test]
    fn test_simple_candidate() {
        let text = r#"before {"action": "book_meeting"} after"#;
        assert_eq!(spans_of(text), vec![r#"{"action": "book_meeting"}"#]);
    }

    #[test]
    fn test_object_without_action_key_is_skipped() {
        let text = r#"data {"foo": "bar"} more"#;
        assert!(spans_of(text).is_empty());
    }

    #[test]
    fn test_nested_braces() {
        let text = r#"{"action": "create_lead", "lead": {"name": "Jane"}}"#;
        assert_eq!(spans_of(text), vec![text]);
    }

    #[test]
    fn test_braces_inside_string_values() {
        let text = r#"{"action": "create_lead", "lead": {"message": "use {curly} braces"}}"#;
        assert_eq!(spans_of(text), vec![text]);
    }

    #[test]
    fn test_arrays_do_not_start_spans() {
        let text = r#"{"action": "recommend_services", "services": ["seo", "web-dev"]}"#;
        assert_eq!(spans_of(text), vec![text]);
    }

    #[test]
    fn test_object_inside_top_level_array_is_not_a_candidate() {
        let text = r#"list: [{"action": "book_meeting"}] end"#;
        assert!(spans_of(text).is_empty());
    }

    #[test]
    fn test_multiple_candidates_in_order() {
        let text = r#"{"action": "book_meeting"} and {"action": "recommend_services", "services": []}"#;
        let spans = spans_of(text);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].contains("book_meeting"));
        assert!(spans[1].contains("recommend_services"));
    }

    #[test]
    fn test_quoted_json_is_not_structural() {
        // The brace sits inside a double-quoted string, so no span starts.
        let text = r#"She typed "{ but never closed it. {"action": "book_meeting"}"#;
        // The stray quote swallows the rest of the line; nothing is found.
        assert!(spans_of(text).is_empty());
    }

    #[test]
    fn test_escaped_quotes_stay_inside_string() {
        let text = r#"note "a \"quoted\" brace {" then {"action": "book_meeting"}"#;
        assert_eq!(spans_of(text), vec![r#"{"action": "book_meeting"}"#]);
    }

    #[test]
    fn test_unterminated_object_yields_nothing() {
        let text = r#"oops {"action": "book_meeting""#;
        assert!(spans_of(text).is_empty());
    }

    #[test]
    fn test_stray_closers_are_ignored() {
        let text = r#"} ] {"action": "book_meeting"}"#;
        assert_eq!(spans_of(text).len(), 1);
    }

    #[test]
    fn test_multibyte_text_offsets() {
        let text = "héllo — {\"action\": \"book_meeting\"} — büe";
        let spans = find_candidate_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(
            &text[spans[0].start..spans[0].end],
            "{\"action\": \"book_meeting\"}"
        );
    }
}
