use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Julian day number of 1 Muharram 1 AH (civil epoch, 16 July 622 Julian)
const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Offset between chrono's day count from 0001-01-01 and the Julian day number
const CE_TO_JDN: i64 = 1_721_425;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// Date in the tabular Islamic calendar.
///
/// Arithmetic (30-year cycle) rather than sighting-based, so it can differ
/// from a local moon-sighting calendar by a day. Good enough for a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HijriDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// `None` for dates before the start of the calendar
    pub fn from_gregorian(date: NaiveDate) -> Option<Self> {
        let jdn = date.num_days_from_ce() as i64 + CE_TO_JDN;
        if jdn < HIJRI_EPOCH_JDN {
            return None;
        }

        let mut l = jdn - HIJRI_EPOCH_JDN + 10632;
        let n = (l - 1) / 10631;
        l = l - 10631 * n + 354;
        let j = ((10985 - l) / 5316) * ((50 * l) / 17719) + (l / 5670) * ((43 * l) / 15238);
        l = l - ((30 - j) / 15) * ((17719 * j) / 50) - (j / 16) * ((15238 * j) / 43) + 29;
        let month = (24 * l) / 709;
        let day = l - (709 * month) / 24;
        let year = 30 * n + j - 30;

        Some(Self {
            year,
            month: month as u32,
            day: day as u32,
        })
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} AH",
            self.day,
            self.month_name().to_uppercase(),
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hijri(y: i32, m: u32, d: u32) -> HijriDate {
        HijriDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn test_start_of_ramadan() {
        assert_eq!(hijri(2024, 3, 11), HijriDate { year: 1445, month: 9, day: 1 });
        assert_eq!(hijri(2023, 3, 23), HijriDate { year: 1444, month: 9, day: 1 });
        assert_eq!(hijri(2025, 3, 1), HijriDate { year: 1446, month: 9, day: 1 });
    }

    #[test]
    fn test_epoch() {
        assert_eq!(hijri(622, 7, 19), HijriDate { year: 1, month: 1, day: 1 });
        assert_eq!(
            HijriDate::from_gregorian(NaiveDate::from_ymd_opt(600, 1, 1).unwrap()),
            None
        );
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(hijri(2024, 6, 1).to_string(), @"24 DHU AL-QADAH 1445 AH");
    }
}
