pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// Parse a backend timestamp (RFC 3339) into epoch millis via the browser's
/// Date parser. Returns None for anything the runtime cannot parse.
pub(crate) fn parse_timestamp_ms(value: &str) -> Option<i64> {
    let ms = js_sys::Date::parse(value);
    if ms.is_nan() {
        None
    } else {
        Some(ms.round() as i64)
    }
}

/// Human-readable distance between a past instant and now.
pub(crate) fn format_relative_ms(delta_ms: i64) -> String {
    const MINUTE: i64 = 60_000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    if delta_ms < MINUTE {
        return "just now".to_string();
    }
    if delta_ms < HOUR {
        return format!("{}m ago", delta_ms / MINUTE);
    }
    if delta_ms < DAY {
        return format!("{}h ago", delta_ms / HOUR);
    }
    format!("{}d ago", delta_ms / DAY)
}

/// Relative display for a backend timestamp, or the raw string when it does
/// not parse (absent/odd values render as-is rather than as an error).
pub(crate) fn relative_time(timestamp: &str, now_ms: i64) -> String {
    match parse_timestamp_ms(timestamp) {
        Some(ts) => format_relative_ms(now_ms - ts),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_format_boundaries() {
        assert_eq!(format_relative_ms(0), "just now");
        assert_eq!(format_relative_ms(59_999), "just now");
        assert_eq!(format_relative_ms(60_000), "1m ago");
        assert_eq!(format_relative_ms(5 * 60_000), "5m ago");
        assert_eq!(format_relative_ms(3 * 3_600_000), "3h ago");
        assert_eq!(format_relative_ms(2 * 86_400_000), "2d ago");
    }

    #[test]
    fn negative_delta_reads_as_just_now() {
        // Client clock slightly behind the server timestamp.
        assert_eq!(format_relative_ms(-5_000), "just now");
    }
}
