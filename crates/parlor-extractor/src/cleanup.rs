//! Named finishing passes applied after action spans are deleted

use once_cell::sync::Lazy;
use regex::Regex;

/// Any http(s) URL, stripped during the booking-link scrub.
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// "here:" phrasing left dangling once its link is gone.
static HERE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[ \t]*\bhere:[ \t]*").unwrap());

/// Empty `{}` remnants.
static EMPTY_BRACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*\}").unwrap());

/// A `: {` fragment dangling at the end of a line.
static DANGLING_BRACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m):[ \t]*\{[ \t]*$").unwrap());

/// Runs of punctuation (with interleaved spaces) at the start of a line.
static LINE_LEAD_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:[ \t]*[,.;:!?]+)+[ \t]*").unwrap());

/// Whitespace immediately before punctuation.
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+([,.;:!?])").unwrap());

/// Runs of two or more spaces or tabs.
static SPACE_RUNS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Trailing whitespace on a line.
static LINE_TRAIL_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

/// Three or more consecutive newlines, i.e. more than one blank line.
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip the configured booking link from the text.
///
/// Returns the scrubbed text and whether the booking call to action must be
/// forced on. The scrub triggers when the text contains the configured link
/// literally, or the case-insensitive substring "calendly"; it then removes
/// the link, every `http(s)://` URL, and dangling "here:" phrasing. Text
/// without either marker passes through untouched.
pub(crate) fn scrub_booking_link(text: &str, booking_link: &str) -> (String, bool) {
    let has_link = !booking_link.is_empty() && text.contains(booking_link);
    let mentions_calendly = text.to_lowercase().contains("calendly");
    if !has_link && !mentions_calendly {
        return (text.to_string(), false);
    }

    let mut out = if booking_link.is_empty() {
        text.to_string()
    } else {
        text.replace(booking_link, "")
    };
    out = URL_RE.replace_all(&out, "").into_owned();
    out = HERE_RE.replace_all(&out, " ").into_owned();

    (out, true)
}

/// Normalize whitespace and punctuation artifacts left by span deletion.
///
/// Each pass is idempotent, so the whole normalization is: running it on
/// its own output changes nothing.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let mut out = EMPTY_BRACES_RE.replace_all(text, "").into_owned();
    out = DANGLING_BRACE_RE.replace_all(&out, ":").into_owned();
    out = LINE_LEAD_PUNCT_RE.replace_all(&out, "").into_owned();
    out = SPACE_BEFORE_PUNCT_RE.replace_all(&out, "$1").into_owned();
    out = SPACE_RUNS_RE.replace_all(&out, " ").into_owned();
    out = LINE_TRAIL_WS_RE.replace_all(&out, "").into_owned();
    out = BLANK_LINES_RE.replace_all(&out, "\n\n").into_owned();
    out.trim().to_string()
}
