use crate::schedule::local_midnight;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Radius of the radial indicator the web client has always drawn
pub const DEFAULT_RING_RADIUS: f64 = 94.0;

/// Elapsed fraction between two boundaries, for ring-style rendering.
///
/// | prev | next | result |
/// |------|------|--------|
/// | none | some | midnight of next's local date -> next |
/// | some | none | 1.0 (day fully elapsed) |
/// | none | none | 1.0 (unknown, show a full ring) |
/// | some | some | prev -> next |
///
/// The result is always within `[0, 1]`.
pub fn fraction(
    prev: Option<DateTime<Utc>>,
    next: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> f64 {
    match (prev, next) {
        (None, Some(next)) => {
            let day_start = local_midnight(next.with_timezone(tz).date_naive(), tz);
            span_fraction(day_start, next, now)
        }
        (Some(_), None) | (None, None) => 1.0,
        (Some(prev), Some(next)) => span_fraction(prev, next, now),
    }
}

/// `(now - start) / (end - start)` clamped to `[0, 1]`.
///
/// An empty or inverted span has no interior: it reads as complete once
/// `now` reaches `end` and as empty before that.
pub fn span_fraction(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return if now >= end { 1.0 } else { 0.0 };
    }

    let done = (now - start).num_milliseconds();
    (done as f64 / total as f64).clamp(0.0, 1.0)
}

pub fn ring_circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// SVG `stroke-dashoffset` that reveals `fraction` of a ring
pub fn ring_dash_offset(fraction: f64, radius: f64) -> f64 {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    ring_circumference(radius) * (1.0 - fraction)
}
