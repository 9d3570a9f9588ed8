use crate::{ClockTime, PrayerLabel};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A prayer label resolved to an absolute instant for one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub label: PrayerLabel,
    pub clock_time: ClockTime,
    pub instant: DateTime<Utc>,
}

/// The six events of one date, in `PrayerLabel` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub date: NaiveDate,
    events: Vec<ScheduleEvent>,
}

impl Schedule {
    pub fn new(date: NaiveDate, events: Vec<ScheduleEvent>) -> Self {
        Self { date, events }
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&ScheduleEvent> {
        self.events.get(index)
    }

    pub fn event(&self, label: PrayerLabel) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.label == label)
    }

    pub fn first(&self) -> Option<&ScheduleEvent> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&ScheduleEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Where `now` falls within one schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Last event with `instant <= now`; `None` before the first event
    pub active_index: Option<usize>,
    /// First event with `instant > now`
    pub next_event: Option<ScheduleEvent>,
    /// Every event has passed; "next" lives in the following day's schedule
    pub next_is_tomorrow: bool,
}

impl Resolution {
    pub fn active_event<'a>(&self, schedule: &'a Schedule) -> Option<&'a ScheduleEvent> {
        self.active_index.and_then(|i| schedule.get(i))
    }
}

/// Per-evaluation status handed to the render layer. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Status {
    pub active_index: Option<usize>,
    /// `None` only when "next" needs tomorrow's data and none was available
    pub next_event: Option<ScheduleEvent>,
    pub next_is_tomorrow: bool,
    pub progress_fraction: f64,
}

impl Status {
    /// Combine a resolution with a completed "next" and progress value
    pub fn from_resolution(
        resolution: Resolution,
        next_event: Option<ScheduleEvent>,
        progress_fraction: f64,
    ) -> Self {
        Self {
            active_index: resolution.active_index,
            next_event,
            next_is_tomorrow: resolution.next_is_tomorrow,
            progress_fraction,
        }
    }

    /// `active_index` in the -1-for-none convention used by JSON consumers
    pub fn active_index_signed(&self) -> i64 {
        self.active_index.map(|i| i as i64).unwrap_or(-1)
    }
}
