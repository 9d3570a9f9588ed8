use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use waqt_engine::DeltaLabel;
use waqt_types::{ClockTime, PrayerLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineMode {
    Live,
    Inspect,
}

/// One evaluated frame, as raw data
#[derive(Debug, Clone, Serialize)]
pub struct TimelineViewModel {
    pub mode: TimelineMode,
    pub date: NaiveDate,
    pub timezone: String,
    pub now: DateTime<Utc>,
    pub local_time: ClockTime,
    pub header: String,
    pub hijri: Option<HijriViewModel>,
    pub active: Option<PrayerLabel>,
    /// -1 before Fajr
    pub active_index: i64,
    pub next: Option<NextPrayerViewModel>,
    pub progress: ProgressViewModel,
    pub prayers: Vec<PrayerRowViewModel>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HijriViewModel {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub month_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextPrayerViewModel {
    pub label: PrayerLabel,
    pub clock_time: ClockTime,
    pub instant: DateTime<Utc>,
    pub is_tomorrow: bool,
    pub seconds_until: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressViewModel {
    pub fraction: f64,
    pub ring_radius: f64,
    pub ring_circumference: f64,
    pub ring_dash_offset: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrayerRowViewModel {
    pub label: PrayerLabel,
    pub clock_time: ClockTime,
    pub instant: DateTime<Utc>,
    /// Negative once the prayer has passed
    pub seconds_from_now: i64,
    /// `IN 03H 00M` / `01H 00M AGO`
    pub delta: DeltaLabel,
    pub active: bool,
}
