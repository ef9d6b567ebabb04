//! Payload convention for `REGISTER` messages.
//!
//! The payload is free text containing `TOPICS: ` followed by a
//! comma-separated list of topic names on the same line:
//!
//! ```text
//! hello broker
//! TOPICS: weather, alerts
//! ```

use crate::utils::error::PacketError;

pub const TOPICS_MARKER: &str = "TOPICS: ";

/// Extracts the topic names from a registration payload.
///
/// Names are trimmed and empty entries skipped. Duplicates are kept.
pub fn parse_topics(payload: &str) -> Result<Vec<String>, PacketError> {
    let (_, rest) = payload
        .split_once(TOPICS_MARKER)
        .ok_or(PacketError::NoTopics)?;
    let line = rest.lines().next().unwrap_or_default();

    let topics: Vec<String> = line
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect();

    if topics.is_empty() {
        return Err(PacketError::NoTopics);
    }
    Ok(topics)
}

/// Inverse of [`parse_topics`]; also used as the acknowledgment payload.
pub fn format_topics<S: AsRef<str>>(topics: &[S]) -> String {
    let names: Vec<&str> = topics.iter().map(AsRef::as_ref).collect();
    format!("{TOPICS_MARKER}{}", names.join(","))
}
