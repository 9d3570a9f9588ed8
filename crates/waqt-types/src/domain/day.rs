use super::{ClockTime, PrayerLabel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of the timetable.
///
/// Serializes to the same flat shape the timetable API has always returned:
/// `{ "date", "timezone"?, "fajr", "sunrise", "zuhr", "asr", "maghrib", "isha" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTimes {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub zuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
}

impl DayTimes {
    /// Build from times given in `PrayerLabel::ALL` order
    pub fn new(date: NaiveDate, times: [ClockTime; 6]) -> Self {
        let [fajr, sunrise, zuhr, asr, maghrib, isha] = times;
        Self {
            date,
            timezone: None,
            fajr,
            sunrise,
            zuhr,
            asr,
            maghrib,
            isha,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn get(&self, label: PrayerLabel) -> ClockTime {
        match label {
            PrayerLabel::Fajr => self.fajr,
            PrayerLabel::Sunrise => self.sunrise,
            PrayerLabel::Zuhr => self.zuhr,
            PrayerLabel::Asr => self.asr,
            PrayerLabel::Maghrib => self.maghrib,
            PrayerLabel::Isha => self.isha,
        }
    }

    /// Labeled times in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (PrayerLabel, ClockTime)> + '_ {
        PrayerLabel::ALL.into_iter().map(|label| (label, self.get(label)))
    }

    /// Check the ordering invariant (Fajr <= Sunrise <= ... <= Isha).
    ///
    /// Meant for the data-authoring boundary; schedule building does not
    /// call this.
    pub fn validate(&self) -> crate::Result<()> {
        let mut previous: Option<(PrayerLabel, ClockTime)> = None;
        for (label, time) in self.iter() {
            if let Some((prev_label, prev_time)) = previous
                && time < prev_time
            {
                return Err(crate::Error::MalformedSchedule {
                    date: self.date,
                    message: format!(
                        "{} ({}) is earlier than {} ({})",
                        label.key(),
                        time,
                        prev_label.key(),
                        prev_time
                    ),
                });
            }
            previous = Some((label, time));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
