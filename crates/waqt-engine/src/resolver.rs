use chrono::{DateTime, Utc};
use waqt_types::{Resolution, Schedule};

/// Locate `now` within a schedule.
///
/// Windows are half-open: event `i` is active over `[event_i, event_{i+1})`,
/// so an event whose instant equals `now` counts as passed. When every event
/// has passed the resolution asks for tomorrow instead of inventing a Fajr.
pub fn resolve(schedule: &Schedule, now: DateTime<Utc>) -> Resolution {
    let mut active_index = None;
    let mut next_event = None;

    for (index, event) in schedule.events().iter().enumerate() {
        if event.instant <= now {
            active_index = Some(index);
        } else if next_event.is_none() {
            next_event = Some(*event);
        }
    }

    Resolution {
        active_index,
        next_event,
        next_is_tomorrow: next_event.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_schedule;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::Europe::London;
    use waqt_types::{ClockTime, DayTimes, PrayerLabel};

    fn schedule() -> Schedule {
        let times = ["05:00", "06:10", "13:00", "17:00", "21:00", "22:30"]
            .map(|raw| raw.parse::<ClockTime>().unwrap());
        let day = DayTimes::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), times);
        build_schedule(&day, &London)
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        London
            .with_ymd_and_hms(2024, 6, 1, h, m, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_midday_between_zuhr_and_asr() {
        let resolution = resolve(&schedule(), at(14, 0));
        assert_eq!(resolution.active_index, Some(PrayerLabel::Zuhr.index()));
        assert_eq!(
            resolution.next_event.map(|e| e.label),
            Some(PrayerLabel::Asr)
        );
        assert!(!resolution.next_is_tomorrow);
    }

    #[test]
    fn test_before_fajr_has_no_active_event() {
        let resolution = resolve(&schedule(), at(4, 0));
        assert_eq!(resolution.active_index, None);
        assert_eq!(
            resolution.next_event.map(|e| e.label),
            Some(PrayerLabel::Fajr)
        );
    }

    #[test]
    fn test_after_isha_needs_tomorrow() {
        let resolution = resolve(&schedule(), at(23, 0));
        assert_eq!(resolution.active_index, Some(PrayerLabel::Isha.index()));
        assert_eq!(resolution.next_event, None);
        assert!(resolution.next_is_tomorrow);
    }

    #[test]
    fn test_event_instant_counts_as_active() {
        let schedule = schedule();
        for (i, event) in schedule.events().iter().enumerate() {
            let resolution = resolve(&schedule, event.instant);
            assert_eq!(resolution.active_index, Some(i));
            if let Some(next) = resolution.next_event {
                assert!(next.instant > event.instant);
            }
        }
    }

    #[test]
    fn test_active_index_is_monotonic_over_the_day() {
        let schedule = schedule();
        let mut previous: Option<usize> = None;
        let mut now = London
            .with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let end = now + chrono::Duration::hours(24);

        while now < end {
            let active = resolve(&schedule, now).active_index;
            assert!(active >= previous, "active index went backwards at {}", now);
            previous = active;
            now += chrono::Duration::minutes(7);
        }
        assert_eq!(previous, Some(5));
    }

    #[test]
    fn test_equal_neighbours_skip_to_later_event() {
        let times = ["05:00", "06:10", "13:00", "17:00", "21:00", "21:00"]
            .map(|raw| raw.parse::<ClockTime>().unwrap());
        let day = DayTimes::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), times);
        let schedule = build_schedule(&day, &London);

        let resolution = resolve(&schedule, at(21, 0));
        assert_eq!(resolution.active_index, Some(PrayerLabel::Isha.index()));
        assert!(resolution.next_is_tomorrow);
    }

    #[test]
    fn test_empty_schedule_defers_to_tomorrow() {
        let empty = Schedule::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), Vec::new());
        let resolution = resolve(&empty, at(12, 0));
        assert_eq!(resolution.active_index, None);
        assert!(resolution.next_is_tomorrow);
    }
}
