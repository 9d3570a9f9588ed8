use crate::traits::DayDataProvider;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use waqt_types::DayTimes;

/// Provider over an in-process map of days
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    days: HashMap<NaiveDate, DayTimes>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: DayTimes) {
        self.days.insert(day.date, day);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<DayTimes> for MemoryProvider {
    fn from_iter<I: IntoIterator<Item = DayTimes>>(iter: I) -> Self {
        let mut provider = Self::new();
        for day in iter {
            provider.insert(day);
        }
        provider
    }
}

impl DayDataProvider for MemoryProvider {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, date: NaiveDate) -> Result<DayTimes> {
        self.days.get(&date).cloned().ok_or_else(|| {
            Error::DataUnavailable(format!("No prayer times for {}", date.format("%Y-%m-%d")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waqt_types::ClockTime;

    #[test]
    fn test_fetch_hit_and_miss() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let times = ["05:00", "06:10", "13:00", "17:00", "21:00", "22:30"]
            .map(|raw| raw.parse::<ClockTime>().unwrap());
        let provider: MemoryProvider = [DayTimes::new(date, times)].into_iter().collect();

        assert_eq!(provider.len(), 1);
        assert_eq!(provider.fetch(date).unwrap().date, date);

        let missing = provider.fetch(date.succ_opt().unwrap()).unwrap_err();
        assert!(missing.is_data_unavailable());
    }
}
