use crate::presentation::view_models::{
    CommandResultViewModel, HijriViewModel, NextPrayerViewModel, PrayerRowViewModel,
    ProgressViewModel, StatusBadge, TimelineMode, TimelineViewModel, Tip,
};
use waqt_engine::ring_circumference;
use waqt_runtime::{Frame, Mode};

/// Frame to raw view model; `ring_radius` sizes the dash-offset fields
pub fn build_timeline(frame: &Frame, ring_radius: f64) -> TimelineViewModel {
    let mode = match frame.mode {
        Mode::Live => TimelineMode::Live,
        Mode::Inspect(_) => TimelineMode::Inspect,
    };

    let next = frame.next_event().map(|event| NextPrayerViewModel {
        label: event.label,
        clock_time: event.clock_time,
        instant: event.instant,
        is_tomorrow: frame.status.next_is_tomorrow,
        seconds_until: (event.instant - frame.now).num_seconds(),
    });

    let prayers = frame
        .rows
        .iter()
        .map(|row| PrayerRowViewModel {
            label: row.label,
            clock_time: row.clock_time,
            instant: row.instant,
            seconds_from_now: (row.instant - frame.now).num_seconds(),
            delta: row.delta.clone(),
            active: row.active,
        })
        .collect();

    TimelineViewModel {
        mode,
        date: frame.date,
        timezone: frame.timezone.clone(),
        now: frame.now,
        local_time: frame.local_time,
        header: frame.header.clone(),
        hijri: frame.hijri.map(|h| HijriViewModel {
            year: h.year,
            month: h.month,
            day: h.day,
            month_name: h.month_name().to_string(),
        }),
        active: frame.active_event().map(|e| e.label),
        active_index: frame.status.active_index_signed(),
        next,
        progress: ProgressViewModel {
            fraction: frame.status.progress_fraction,
            ring_radius,
            ring_circumference: ring_circumference(ring_radius),
            ring_dash_offset: frame.ring_dash_offset(ring_radius),
        },
        prayers,
        notes: frame.notes.clone(),
    }
}

pub fn present_timeline(
    frame: &Frame,
    ring_radius: f64,
) -> CommandResultViewModel<TimelineViewModel> {
    let content = build_timeline(frame, ring_radius);
    let missing_tomorrow = content.mode == TimelineMode::Live && content.next.is_none();
    let mut result = CommandResultViewModel::new(content);

    if missing_tomorrow {
        let next_day = frame.date.succ_opt().unwrap_or(frame.date);
        result = result
            .with_badge(StatusBadge::warning("No timetable for tomorrow"))
            .with_tip(
                Tip::new("Add the next month's timetable file, then check it")
                    .run(format!("waqt check {}", next_day.format("%Y-%m"))),
            );
    }

    result
}
