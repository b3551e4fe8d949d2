//! Display Helpers
//!
//! Small pure functions shared by the chat and insights views.

/// `hh:mm AM/PM` in local time, or the raw string if it is not ISO-8601
pub fn format_time(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%I:%M %p").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// `total_diamonds` becomes `TOTAL DIAMONDS`
pub fn format_stat_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Compact JSON, so strings keep their quotes
pub fn format_stat_value(value: &serde_json::Value) -> String {
    value.to_string()
}

/// True when `text` has something besides whitespace
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// `session_<unix-millis>_<9 base-36 chars>`
pub fn generate_session_id() -> String {
    format!(
        "session_{}_{}",
        js_sys::Date::now() as i64,
        base36_suffix(js_sys::Math::random)
    )
}

fn base36_suffix(mut random: impl FnMut() -> f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    (0..9)
        .map(|_| {
            let idx = ((random() * 36.0) as usize).min(35);
            DIGITS[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat_key() {
        assert_eq!(format_stat_key("total_diamonds"), "TOTAL DIAMONDS");
        assert_eq!(format_stat_key("shapes"), "SHAPES");
    }

    #[test]
    fn test_format_stat_value() {
        assert_eq!(format_stat_value(&serde_json::json!(3.5)), "3.5");
        assert_eq!(format_stat_value(&serde_json::json!("oval")), "\"oval\"");
    }

    #[test]
    fn test_is_sendable() {
        assert!(is_sendable(" cushion cut "));
        assert!(!is_sendable("   "));
    }

    #[test]
    fn test_format_time_invalid_passthrough() {
        assert_eq!(format_time("not a time"), "not a time");
    }

    #[test]
    fn test_base36_suffix() {
        let mut values = [0.0, 0.5, 0.999_999].into_iter().cycle();
        let suffix = base36_suffix(|| values.next().unwrap_or(0.0));
        assert_eq!(suffix, "0iz0iz0iz");
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_generate_session_id_shape() {
        let id = generate_session_id();
        let mut parts = id.splitn(3, '_');

        assert_eq!(parts.next(), Some("session"));
        assert!(parts.next().is_some_and(|millis| millis.parse::<i64>().is_ok()));
        assert!(parts
            .next()
            .is_some_and(|suffix| suffix.len() == 9 && suffix.bytes().all(|b| b.is_ascii_alphanumeric())));
    }
}
