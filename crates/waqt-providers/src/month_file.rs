use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use waqt_types::{ClockTime, DayTimes, PrayerLabel};

/// `YYYY-MM` identifier of one month file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self)
    }

    /// Does `date` fall inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Parse(format!("Invalid month '{}', expected YYYY-MM", s));

        let (y, m) = s.split_once('-').ok_or_else(invalid)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

/// Raw clock-times of one day as stored in a month file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub fajr: String,
    pub sunrise: String,
    pub zuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl DayRecord {
    fn raw(&self, label: PrayerLabel) -> &str {
        match label {
            PrayerLabel::Fajr => &self.fajr,
            PrayerLabel::Sunrise => &self.sunrise,
            PrayerLabel::Zuhr => &self.zuhr,
            PrayerLabel::Asr => &self.asr,
            PrayerLabel::Maghrib => &self.maghrib,
            PrayerLabel::Isha => &self.isha,
        }
    }

    /// Parse every clock-time; ordering is not checked here
    pub fn to_day_times(&self, date: NaiveDate) -> Result<DayTimes> {
        let mut times = [ClockTime::MIDNIGHT; 6];
        for label in PrayerLabel::ALL {
            let raw = self.raw(label);
            times[label.index()] = raw.parse().map_err(|_| {
                Error::Parse(format!(
                    "{} on {}: '{}' is not a valid HH:MM time",
                    label.key(),
                    date,
                    raw
                ))
            })?;
        }
        Ok(DayTimes::new(date, times))
    }

    pub fn from_day_times(day: &DayTimes) -> Self {
        Self {
            fajr: day.fajr.to_string(),
            sunrise: day.sunrise.to_string(),
            zuhr: day.zuhr.to_string(),
            asr: day.asr.to_string(),
            maghrib: day.maghrib.to_string(),
            isha: day.isha.to_string(),
        }
    }
}

/// One `YYYY-MM.json` file: optional timezone label plus days keyed by ISO date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub days: BTreeMap<String, DayRecord>,
}

impl MonthFile {
    pub fn record(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date.format("%Y-%m-%d").to_string())
    }

    pub fn insert(&mut self, day: &DayTimes) {
        self.days.insert(
            day.date.format("%Y-%m-%d").to_string(),
            DayRecord::from_day_times(day),
        );
    }

    /// Every entry parsed into day data, in date order
    pub fn entries(&self) -> Vec<(String, Result<DayTimes>)> {
        self.days
            .iter()
            .map(|(key, record)| {
                let parsed = NaiveDate::parse_from_str(key, "%Y-%m-%d")
                    .map_err(|_| Error::Parse(format!("Invalid date key '{}'", key)))
                    .and_then(|date| record.to_day_times(date));
                (key.clone(), parsed)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "timezone": "Europe/London",
        "days": {
            "2024-06-01": { "fajr": "02:45", "sunrise": "04:47", "zuhr": "13:05", "asr": "17:22", "maghrib": "21:17", "isha": "22:30" },
            "2024-06-02": { "fajr": "02:44", "sunrise": "04:46", "zuhr": "13:05", "asr": "17:22", "maghrib": "21:18", "isha": "22:31" }
        }
    }"#;

    #[test]
    fn test_month_key_parse_and_display() {
        let key: MonthKey = "2024-06".parse().unwrap();
        assert_eq!(key, MonthKey { year: 2024, month: 6 });
        assert_eq!(key.file_name(), "2024-06.json");
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));

        for bad in ["2024-13", "2024-6", "24-06", "2024/06", "june"] {
            assert!(bad.parse::<MonthKey>().is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_record_lookup() -> anyhow::Result<()> {
        let file: MonthFile = serde_json::from_str(SAMPLE)?;
        assert_eq!(file.timezone.as_deref(), Some("Europe/London"));

        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let day = file.record(date).unwrap().to_day_times(date)?;
        assert_eq!(day.isha.to_string(), "22:31");
        assert!(file.record(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()).is_none());
        Ok(())
    }

    #[test]
    fn test_bad_clock_time_names_the_field() {
        let record = DayRecord {
            fajr: "02:45".into(),
            sunrise: "04:47".into(),
            zuhr: "1305".into(),
            asr: "17:22".into(),
            maghrib: "21:17".into(),
            isha: "22:30".into(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let err = record.to_day_times(date).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: zuhr on 2024-06-01: '1305' is not a valid HH:MM time"
        );
    }

    #[test]
    fn test_insert_round_trips_through_entries() {
        let mut file = MonthFile::default();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let times = ["02:45", "04:47", "13:05", "17:22", "21:17", "22:30"]
            .map(|raw| raw.parse::<ClockTime>().unwrap());
        let day = DayTimes::new(date, times);
        file.insert(&day);

        let entries = file.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "2024-06-01");
        assert_eq!(entries[0].1.as_ref().unwrap(), &day);
    }
}
