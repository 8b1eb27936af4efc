//! Date and duration formatting for provider values

/// Format a playback length in seconds as "M:SS".
///
/// Minutes are not wrapped into hours, so an hour-long track reads "60:00".
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Take the date portion of a provider timestamp ("2001-01-01T00:00:00Z" -> "2001-01-01")
pub fn date_only(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}
