//! Keeps response bodies from flooding the log
//!
//! A full WMI list is several megabytes of JSON; only a head of it is ever
//! written to a log line.

/// Maximum number of characters of a body kept in a log line
const PREVIEW_CHARS: usize = 200;

/// Head of `body` for logging, with the total byte length appended when cut.
pub fn preview_body(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_CHARS) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}... [{} bytes total]", &body[..cut], body.len()),
    }
}
