//! Helper utility functions for CLI commands

use chrono::{DateTime, Local, Utc};
use floatchat_core::ChatMessage;

/// Safely truncate a string to a maximum number of characters (not bytes).
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// One transcript line, e.g. `[12:00:00] you: show salinity`
pub fn format_message(message: &ChatMessage) -> String {
    let body = if message.is_pending {
        "AI is thinking..."
    } else {
        message.content.as_str()
    };
    format!(
        "[{}] {}: {body}",
        local_time(message.timestamp),
        message.sender.label()
    )
}
