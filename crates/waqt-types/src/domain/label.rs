use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six daily events of a timetable, in chronological order.
///
/// Variant order is load-bearing: schedules, status indices and the
/// month-file layout all assume `Fajr < Sunrise < Zuhr < Asr < Maghrib < Isha`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PrayerLabel {
    Fajr,
    Sunrise,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerLabel {
    pub const ALL: [PrayerLabel; 6] = [
        PrayerLabel::Fajr,
        PrayerLabel::Sunrise,
        PrayerLabel::Zuhr,
        PrayerLabel::Asr,
        PrayerLabel::Maghrib,
        PrayerLabel::Isha,
    ];

    /// Storage key used by month files and JSON output
    pub fn key(&self) -> &'static str {
        match self {
            PrayerLabel::Fajr => "fajr",
            PrayerLabel::Sunrise => "sunrise",
            PrayerLabel::Zuhr => "zuhr",
            PrayerLabel::Asr => "asr",
            PrayerLabel::Maghrib => "maghrib",
            PrayerLabel::Isha => "isha",
        }
    }

    /// Upper-case name shown to users (the zuhr key is displayed as DHUHR)
    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerLabel::Fajr => "FAJR",
            PrayerLabel::Sunrise => "SUNRISE",
            PrayerLabel::Zuhr => "DHUHR",
            PrayerLabel::Asr => "ASR",
            PrayerLabel::Maghrib => "MAGHRIB",
            PrayerLabel::Isha => "ISHA",
        }
    }

    /// Position within a day's schedule
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PrayerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerLabel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fajr" => Ok(PrayerLabel::Fajr),
            "sunrise" => Ok(PrayerLabel::Sunrise),
            "zuhr" | "dhuhr" => Ok(PrayerLabel::Zuhr),
            "asr" => Ok(PrayerLabel::Asr),
            "maghrib" => Ok(PrayerLabel::Maghrib),
            "isha" => Ok(PrayerLabel::Isha),
            _ => Err(crate::Error::UnknownLabel(s.to_string())),
        }
    }
}
