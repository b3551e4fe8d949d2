//! Text Rendering
//!
//! Plain-text views of the chat thread and the insights snapshot for the
//! terminal client.

use chrono::{DateTime, Local, TimeZone};

use crate::insights::InsightSnapshot;
use crate::session::Message;

/// Display name of the assistant
pub const BOT_NAME: &str = "Diamond Assistant";

/// Shown in place of the reply while a call is outstanding
pub const TYPING_PLACEHOLDER: &str = "Diamond Assistant is typing...";

/// `hh:mm AM/PM` in local time, or the raw string if it is not ISO-8601
pub fn format_time(timestamp: &str) -> String {
    format_time_in(timestamp, &Local)
}

/// [`format_time`] in an explicit time zone
pub fn format_time_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(tz).format("%I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// One line per message: `[02:30 PM] You: ...`
pub fn render_message(message: &Message) -> String {
    render_message_with(message, format_time)
}

fn render_message_with(message: &Message, time: impl Fn(&str) -> String) -> String {
    let speaker = if message.is_bot() { BOT_NAME } else { "You" };
    format!("[{}] {}: {}", time(message.timestamp()), speaker, message.content())
}

/// `total_diamonds` becomes `TOTAL DIAMONDS`
pub fn format_stat_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Compact JSON, so strings keep their quotes
pub fn format_stat_value(value: &serde_json::Value) -> String {
    value.to_string()
}

/// The dashboard: stats card followed by the log panel
pub fn render_snapshot(snapshot: Option<&InsightSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return "Loading insights...".to_string();
    };

    let mut out = String::new();
    out.push_str("Knowledge Base Stats\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');

    if snapshot.stats.is_empty() {
        out.push_str("No stats available\n");
    } else {
        for (key, value) in &snapshot.stats {
            out.push_str(&format!("{}: {}\n", format_stat_key(key), format_stat_value(value)));
        }
    }

    out.push('\n');
    out.push_str("System Logs\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');
    for line in &snapshot.logs {
        out.push_str(line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::InsightStats;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_format_time_utc() {
        assert_eq!(format_time_in("2024-01-01T14:05:00Z", &Utc), "02:05 PM");
        assert_eq!(format_time_in("2024-01-01T00:30:00.123Z", &Utc), "12:30 AM");
        assert_eq!(format_time_in("2024-01-01T09:00:00+02:00", &Utc), "07:00 AM");
    }

    #[test]
    fn test_format_time_unparseable() {
        assert_eq!(format_time_in("yesterday", &Utc), "yesterday");
    }

    #[test]
    fn test_render_message_speakers() {
        let fixed = |_: &str| "10:00 AM".to_string();
        assert_eq!(
            render_message_with(&Message::user("hi"), fixed),
            "[10:00 AM] You: hi"
        );
        assert_eq!(
            render_message_with(&Message::bot("hello"), fixed),
            "[10:00 AM] Diamond Assistant: hello"
        );
    }

    #[test]
    fn test_stat_formatting() {
        assert_eq!(format_stat_key("total_diamonds"), "TOTAL DIAMONDS");
        assert_eq!(format_stat_value(&json!(42)), "42");
        assert_eq!(format_stat_value(&json!("round")), "\"round\"");
        assert_eq!(format_stat_value(&json!(["a", "b"])), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_render_snapshot() {
        assert_eq!(render_snapshot(None), "Loading insights...");

        let snapshot = InsightSnapshot::new(
            InsightStats::from([("total_diamonds".to_string(), json!(42))]),
            vec!["INFO started".to_string()],
        );
        let text = render_snapshot(Some(&snapshot));
        assert!(text.contains("TOTAL DIAMONDS: 42"));
        assert!(text.ends_with("INFO started\n"));

        let empty = InsightSnapshot::new(InsightStats::new(), Vec::new());
        assert!(render_snapshot(Some(&empty)).contains("No stats available"));
    }
}
