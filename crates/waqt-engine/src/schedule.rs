use chrono::{DateTime, LocalResult, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use waqt_types::{ClockTime, DayTimes, Schedule, ScheduleEvent};

/// Turn one day of wall-clock times into six absolute events.
///
/// Input is trusted: ordering is checked only by a debug assertion.
pub fn build_schedule(day: &DayTimes, tz: &Tz) -> Schedule {
    debug_assert!(
        day.is_valid(),
        "day data for {} violates prayer ordering",
        day.date
    );

    let events = day
        .iter()
        .map(|(label, clock_time)| ScheduleEvent {
            label,
            clock_time,
            instant: resolve_instant(day.date, clock_time, tz),
        })
        .collect();

    Schedule::new(day.date, events)
}

/// Combine a date and wall-clock time in the operating timezone.
///
/// A repeated local time (DST fold) resolves to its earliest instant. A
/// skipped local time (DST gap) uses the offset in force at the start of
/// that day.
pub fn resolve_instant(date: NaiveDate, time: ClockTime, tz: &Tz) -> DateTime<Utc> {
    let local = date.and_time(time.to_naive_time());
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let day_start = date.and_time(ClockTime::MIDNIGHT.to_naive_time());
            let offset = tz.offset_from_utc_datetime(&day_start).fix();
            (local - chrono::Duration::seconds(offset.local_minus_utc() as i64)).and_utc()
        }
    }
}

/// Start of `date` in the operating timezone
pub fn local_midnight(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    resolve_instant(date, ClockTime::MIDNIGHT, tz)
}

/// Wall-clock time of an instant in the operating timezone, minute precision
pub fn clock_time_of(instant: DateTime<Utc>, tz: &Tz) -> ClockTime {
    ClockTime::from_naive_time(instant.with_timezone(tz).time())
}
