use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// Format the magnitude of a delta as `01H 05M` (one hour or more) or `05M`.
///
/// Seconds are truncated. The sign is dropped; callers attach it with
/// [`DeltaLabel`].
pub fn format_duration(delta: Duration) -> String {
    let total_minutes = delta.num_seconds().unsigned_abs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{:02}H {:02}M", hours, minutes)
    } else {
        format!("{:02}M", minutes)
    }
}

/// Signed duration label shown next to each event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "direction", content = "duration", rename_all = "lowercase")]
pub enum DeltaLabel {
    In(String),
    Ago(String),
}

impl fmt::Display for DeltaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaLabel::In(d) => write!(f, "IN {}", d),
            DeltaLabel::Ago(d) => write!(f, "{} AGO", d),
        }
    }
}

/// Label for `target` as seen from `now`; an event happening right now reads `IN 00M`
pub fn delta_label(target: DateTime<Utc>, now: DateTime<Utc>) -> DeltaLabel {
    let delta = target - now;
    if delta >= Duration::zero() {
        DeltaLabel::In(format_duration(delta))
    } else {
        DeltaLabel::Ago(format_duration(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_an_hour() {
        assert_eq!(format_duration(Duration::minutes(5)), "05M");
        assert_eq!(format_duration(Duration::seconds(59)), "00M");
        assert_eq!(format_duration(Duration::minutes(59)), "59M");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_duration(Duration::minutes(65)), "01H 05M");
        assert_eq!(format_duration(Duration::hours(3)), "03H 00M");
        assert_eq!(format_duration(Duration::minutes(6 * 60 + 30)), "06H 30M");
    }

    #[test]
    fn test_sign_is_ignored() {
        assert_eq!(
            format_duration(Duration::minutes(-65)),
            format_duration(Duration::minutes(65))
        );
    }

    #[test]
    fn test_seconds_truncate() {
        assert_eq!(format_duration(Duration::seconds(3599)), "59M");
        assert_eq!(format_duration(Duration::seconds(-119)), "01M");
    }

    #[test]
    fn test_delta_labels() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T13:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let ahead = delta_label(now + Duration::minutes(90), now);
        insta::assert_snapshot!(ahead.to_string(), @"IN 01H 30M");

        let behind = delta_label(now - Duration::minutes(12), now);
        insta::assert_snapshot!(behind.to_string(), @"12M AGO");

        assert_eq!(delta_label(now, now), DeltaLabel::In("00M".to_string()));
    }

    #[test]
    fn test_delta_label_json() {
        let label = DeltaLabel::Ago("02H 10M".to_string());
        insta::assert_json_snapshot!(label, @r#"
        {
          "direction": "ago",
          "duration": "02H 10M"
        }
        "#);
    }
}
