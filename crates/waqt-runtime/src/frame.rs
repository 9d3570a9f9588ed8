use crate::controller::Mode;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use waqt_engine::{DeltaLabel, HijriDate, clock_time_of, delta_label, ring_dash_offset};
use waqt_types::{ClockTime, PrayerLabel, Schedule, ScheduleEvent, Status};

/// One line of the per-prayer list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub label: PrayerLabel,
    pub clock_time: ClockTime,
    pub instant: DateTime<Utc>,
    pub delta: DeltaLabel,
    pub active: bool,
}

/// Everything a renderer needs for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    #[serde(flatten)]
    pub mode: Mode,
    pub date: NaiveDate,
    pub timezone: String,
    pub now: DateTime<Utc>,
    pub local_time: ClockTime,
    /// `Saturday, 1 June 2024`
    pub header: String,
    pub hijri: Option<HijriDate>,
    pub schedule: Schedule,
    pub status: Status,
    pub rows: Vec<EventRow>,
    pub notes: Vec<String>,
}

impl Frame {
    pub fn new(mode: Mode, schedule: Schedule, status: Status, now: DateTime<Utc>, tz: &Tz) -> Self {
        let date = schedule.date;
        let rows = schedule
            .events()
            .iter()
            .enumerate()
            .map(|(i, event)| EventRow {
                label: event.label,
                clock_time: event.clock_time,
                instant: event.instant,
                delta: delta_label(event.instant, now),
                active: status.active_index == Some(i),
            })
            .collect();

        Self {
            mode,
            date,
            timezone: tz.name().to_string(),
            now,
            local_time: clock_time_of(now, tz),
            header: date.format("%A, %-d %B %Y").to_string(),
            hijri: HijriDate::from_gregorian(date),
            schedule,
            status,
            rows,
            notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn active_event(&self) -> Option<&ScheduleEvent> {
        self.status.active_index.and_then(|i| self.schedule.get(i))
    }

    /// Next event, which may be tomorrow's Fajr
    pub fn next_event(&self) -> Option<&ScheduleEvent> {
        self.status.next_event.as_ref()
    }

    /// Countdown to the next event
    pub fn next_delta(&self) -> Option<DeltaLabel> {
        self.next_event().map(|e| delta_label(e.instant, self.now))
    }

    pub fn progress_percent(&self) -> u8 {
        (self.status.progress_fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn ring_dash_offset(&self, radius: f64) -> f64 {
        ring_dash_offset(self.status.progress_fraction, radius)
    }
}
