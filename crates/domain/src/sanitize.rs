//! Response sanitizer for raw device replies.
//!
//! The IP-control protocol pads replies with control characters and prefixes
//! values with the field name (`VOL:42`). Both are stripped before a value
//! crosses the service boundary. All functions here are pure and idempotent.

/// Remove every Unicode C0 and C1 control character from a raw reply.
///
/// `char::is_control` matches exactly the `Cc` category, i.e. U+0000–U+001F,
/// U+007F and U+0080–U+009F.
#[must_use]
pub fn strip_control_characters(raw: &str) -> String {
    raw.chars().filter(|ch| !ch.is_control()).collect()
}

/// Sanitize a raw device reply: strip control characters, then the given
/// field-name prefix (`"VOL:"`, `"APP:"`, `"MUTE:"`) when present.
#[must_use]
pub fn sanitize(raw: &str, prefix: &str) -> String {
    let cleaned = strip_control_characters(raw);
    match cleaned.strip_prefix(prefix) {
        Some(value) => value.to_string(),
        None => cleaned,
    }
}
