use chrono::Duration;
use waqt_engine::format_duration;

/// Countdown text for the next prayer; always forward-looking
pub fn countdown(seconds_until: i64) -> String {
    format!("IN {}", format_duration(Duration::seconds(seconds_until.max(0))))
}
