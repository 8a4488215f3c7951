//! Best-effort extraction of a JSON object embedded in free-form model
//! text.
//!
//! Models asked to "respond in JSON format" routinely wrap the object in
//! prose or code fences. The policy here is deliberately crude: take the
//! greedy span from the first `{` to the last `}` and try to parse it.
//! Anything that fails hands the raw text to a fallback constructor
//! instead of surfacing an error.

use serde::de::DeserializeOwned;

/// Locate the greedy brace-delimited span in `text`.
///
/// Returns the slice from the first `{` through the last `}`, or `None`
/// when no such span exists. This is a heuristic with no nesting or
/// string-literal awareness: a stray `}` after the object widens the span
/// and the subsequent parse fails. Known limitation, kept on purpose —
/// it matches the behaviour the frontend was built against.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse a `T` out of the first JSON object span in `text`.
///
/// `None` when no span exists or the span is not valid JSON for `T`.
/// This function never errors; callers build fallback entities on `None`.
pub fn parse_embedded<T: DeserializeOwned>(text: &str) -> Option<T> {
    let span = first_json_object(text)?;
    serde_json::from_str(span).ok()
}
