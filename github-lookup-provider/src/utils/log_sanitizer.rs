//! Keeps API response bodies readable in debug logs.
//!
//! GitHub payloads for a user with many repositories run to tens of
//! kilobytes; only the head of the body is worth logging.

/// Maximum number of characters of a body that reach the log.
const BODY_PREVIEW_CHARS: usize = 256;

/// Shorten a response body for logging.
///
/// Bodies up to [`BODY_PREVIEW_CHARS`] characters are returned unchanged.
/// Longer ones are cut on a character boundary and suffixed with the full
/// byte length.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}... [{} bytes total]", &body[..cut], body.len()),
    }
}
