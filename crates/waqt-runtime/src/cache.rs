use chrono::NaiveDate;
use std::collections::HashMap;
use waqt_types::DayTimes;

/// Per-session day cache.
///
/// Timetable data for a date never changes, so entries are written once,
/// never replaced and never evicted.
#[derive(Debug, Clone, Default)]
pub struct DateCache {
    entries: HashMap<NaiveDate, DayTimes>,
}

impl DateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayTimes> {
        self.entries.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Store `day` under `date` unless an entry already exists; returns the cached value
    pub fn insert(&mut self, date: NaiveDate, day: DayTimes) -> &DayTimes {
        self.entries.entry(date).or_insert(day)
    }

    /// Cached dates, oldest first
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.entries.keys().copied().collect();
        dates.sort();
        dates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
