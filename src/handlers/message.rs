use tracing::debug;

/// Prefix prepended to every message that is present.
pub const READY_PREFIX: &str = "AI System Ready: ";

/// Returned when no message, or an empty one, is supplied.
pub const NO_MESSAGE_FALLBACK: &str = "No message provided";

/// Formats `message` as a readiness announcement.
///
/// Only absence and the empty string select the fallback. Whitespace counts
/// as content and the message text is never trimmed or escaped.
///
/// # Examples
/// ```
/// use ai_system_ready::handlers::message::process_message;
///
/// assert_eq!(process_message(Some("Hello World")), "AI System Ready: Hello World");
/// assert_eq!(process_message(Some("")), "No message provided");
/// assert_eq!(process_message(None), "No message provided");
/// ```
pub fn process_message(message: Option<&str>) -> String {
    match message {
        Some(text) if !text.is_empty() => {
            debug!(len = text.len(), "formatting message");
            format!("{READY_PREFIX}{text}")
        }
        _ => {
            debug!("no message supplied, returning fallback");
            NO_MESSAGE_FALLBACK.to_string()
        }
    }
}
