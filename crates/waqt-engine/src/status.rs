use crate::progress::fraction;
use crate::resolver::resolve;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use waqt_types::{Schedule, Status};

/// Neighbouring-day data the caller managed to obtain for one evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct NightContext<'a> {
    /// Tomorrow's schedule; its first event is "next" once today's Isha has passed
    pub tomorrow: Option<&'a Schedule>,
    /// Yesterday's Isha, used as the pre-Fajr baseline instead of midnight
    pub previous_isha: Option<DateTime<Utc>>,
}

/// Full status of `schedule` at `now`.
///
/// After the last event, `prev` is today's Isha and `next` is tomorrow's Fajr
/// when `night.tomorrow` is present; without it there is no next event and
/// the ring is full. Before the first event the baseline is
/// `night.previous_isha` when given, else local midnight.
pub fn evaluate(schedule: &Schedule, now: DateTime<Utc>, tz: &Tz, night: NightContext<'_>) -> Status {
    let resolution = resolve(schedule, now);

    let (prev, next_event) = if resolution.next_is_tomorrow {
        let tomorrow_first = night.tomorrow.and_then(|s| s.first()).copied();
        (schedule.last().map(|e| e.instant), tomorrow_first)
    } else {
        let prev = match resolution.active_event(schedule) {
            Some(event) => Some(event.instant),
            None => night.previous_isha,
        };
        (prev, resolution.next_event)
    };

    let progress = fraction(prev, next_event.map(|e| e.instant), now, tz);
    Status::from_resolution(resolution, next_event, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_schedule;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::Europe::London;
    use waqt_types::{ClockTime, DayTimes, PrayerLabel};

    fn schedule_for(d: u32) -> Schedule {
        let times = ["05:00", "06:10", "13:00", "17:00", "21:00", "22:30"]
            .map(|raw| raw.parse::<ClockTime>().unwrap());
        let day = DayTimes::new(NaiveDate::from_ymd_opt(2024, 6, d).unwrap(), times);
        build_schedule(&day, &London)
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        London
            .with_ymd_and_hms(2024, 6, d, h, m, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_scenario_midday() {
        let status = evaluate(&schedule_for(1), at(1, 14, 0), &London, NightContext::default());
        assert_eq!(status.active_index, Some(PrayerLabel::Zuhr.index()));
        assert_eq!(status.next_event.map(|e| e.label), Some(PrayerLabel::Asr));
        assert!((status.progress_fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_after_isha_with_tomorrow() {
        let tomorrow = schedule_for(2);
        let night = NightContext {
            tomorrow: Some(&tomorrow),
            previous_isha: None,
        };
        let status = evaluate(&schedule_for(1), at(1, 23, 0), &London, night);

        assert!(status.next_is_tomorrow);
        let next = status.next_event.unwrap();
        assert_eq!(next.label, PrayerLabel::Fajr);
        assert_eq!(next.instant, at(2, 5, 0));
        assert!((status.progress_fraction - 30.0 / 390.0).abs() < 1e-9);
    }

    #[test]
    fn test_after_isha_without_tomorrow_is_full() {
        let status = evaluate(&schedule_for(1), at(1, 23, 0), &London, NightContext::default());
        assert!(status.next_is_tomorrow);
        assert_eq!(status.next_event, None);
        assert_eq!(status.progress_fraction, 1.0);
    }

    #[test]
    fn test_scenario_before_fajr() {
        let status = evaluate(&schedule_for(2), at(2, 4, 0), &London, NightContext::default());
        assert_eq!(status.active_index, None);
        assert_eq!(status.active_index_signed(), -1);
        assert!((status.progress_fraction - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_before_fajr_with_previous_isha_baseline() {
        let yesterday = schedule_for(1);
        let night = NightContext {
            tomorrow: None,
            previous_isha: yesterday.last().map(|e| e.instant),
        };
        let status = evaluate(&schedule_for(2), at(2, 4, 0), &London, night);
        // 22:30 -> 05:00 is 390 minutes, 330 of them elapsed at 04:00
        assert!((status.progress_fraction - 330.0 / 390.0).abs() < 1e-9);
    }

    #[test]
    fn test_previous_isha_ignored_after_fajr() {
        let yesterday = schedule_for(1);
        let night = NightContext {
            tomorrow: None,
            previous_isha: yesterday.last().map(|e| e.instant),
        };
        let with = evaluate(&schedule_for(2), at(2, 14, 0), &London, night);
        let without = evaluate(&schedule_for(2), at(2, 14, 0), &London, NightContext::default());
        assert_eq!(with, without);
    }
}
