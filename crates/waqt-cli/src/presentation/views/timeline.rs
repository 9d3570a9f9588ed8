use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{countdown, progress_bar};
use crate::presentation::view_models::{
    CreateView, DisplayOptions, PrayerRowViewModel, TimelineMode, TimelineViewModel,
};

const BAR_WIDTH: usize = 20;

pub struct TimelineView<'a> {
    data: &'a TimelineViewModel,
    options: DisplayOptions,
}

impl<'a> TimelineView<'a> {
    pub fn new(data: &'a TimelineViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn write_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        if color {
            writeln!(f, "{}", self.data.header.bold())?;
        } else {
            writeln!(f, "{}", self.data.header)?;
        }

        if let Some(hijri) = &self.data.hijri {
            let line = format!(
                "{} {} {} AH",
                hijri.day,
                hijri.month_name.to_uppercase(),
                hijri.year
            );
            if color {
                writeln!(f, "{}", line.dimmed())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }

        let tag = match self.data.mode {
            TimelineMode::Live => "LIVE",
            TimelineMode::Inspect => "INSPECTING",
        };
        let tag = if color {
            match self.data.mode {
                TimelineMode::Live => format!("{}", tag.bright_green()),
                TimelineMode::Inspect => format!("{}", tag.bright_yellow()),
            }
        } else {
            tag.to_string()
        };
        writeln!(f, "{}  {}  {}", self.data.local_time, self.data.timezone, tag)
    }

    fn write_status(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        if self.data.mode == TimelineMode::Live {
            match &self.data.next {
                Some(next) => {
                    let when = if next.is_tomorrow { " tomorrow" } else { "" };
                    let name = next.label.display_name();
                    let name = if color {
                        format!("{}", name.bright_cyan().bold())
                    } else {
                        name.to_string()
                    };
                    writeln!(
                        f,
                        "NEXT  {} {}{}  {}",
                        name,
                        next.clock_time,
                        when,
                        countdown(next.seconds_until)
                    )?;
                }
                None => {
                    let msg = "NEXT  unknown, tomorrow's timetable is missing";
                    if color {
                        writeln!(f, "{}", msg.yellow())?;
                    } else {
                        writeln!(f, "{}", msg)?;
                    }
                }
            }
        }

        let percent = (self.data.progress.fraction * 100.0).round().clamp(0.0, 100.0) as u8;
        writeln!(
            f,
            "{}  {:>3}%",
            progress_bar(self.data.progress.fraction, BAR_WIDTH),
            percent
        )
    }

    fn write_row(&self, f: &mut fmt::Formatter, row: &PrayerRowViewModel) -> fmt::Result {
        let marker = if row.active { "▶" } else { " " };
        let line = format!(
            "{} {:<8} {}  {}",
            marker,
            row.label.display_name(),
            row.clock_time,
            row.delta
        );

        if !self.options.enable_color {
            return writeln!(f, "{}", line);
        }
        if row.active {
            writeln!(f, "{}", line.bright_green().bold())
        } else if row.seconds_from_now < 0 {
            writeln!(f, "{}", line.dimmed())
        } else {
            writeln!(f, "{}", line)
        }
    }
}

impl<'a> fmt::Display for TimelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_header(f)?;
        writeln!(f)?;
        self.write_status(f)?;
        writeln!(f)?;

        for row in &self.data.prayers {
            self.write_row(f, row)?;
        }

        for note in &self.data.notes {
            if self.options.enable_color {
                writeln!(f, "{} {}", "note:".yellow(), note)?;
            } else {
                writeln!(f, "note: {}", note)?;
            }
        }

        Ok(())
    }
}

impl CreateView for TimelineViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(TimelineView::new(self, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_timeline;
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::Europe::London;
    use waqt_providers::MemoryProvider;
    use waqt_runtime::{ControllerOptions, DateModeController, FixedClock};
    use waqt_types::{ClockTime, DayTimes};

    fn controller_at(h: u32, m: u32) -> DateModeController {
        let times = ["05:00", "06:10", "13:00", "17:00", "21:00", "22:30"]
            .map(|raw| raw.parse::<ClockTime>().unwrap());
        let provider: MemoryProvider = [1, 3]
            .into_iter()
            .map(|d| DayTimes::new(NaiveDate::from_ymd_opt(2024, 6, d).unwrap(), times))
            .collect();
        let now = London.with_ymd_and_hms(2024, 6, 1, h, m, 0).unwrap().with_timezone(&Utc);
        DateModeController::new(provider, FixedClock::new(now), London, ControllerOptions::default())
    }

    fn render(vm: &TimelineViewModel) -> String {
        TimelineView::new(vm, DisplayOptions::plain()).to_string()
    }

    #[test]
    fn test_live_midday() {
        let frame = controller_at(14, 0).frame().unwrap();
        insta::assert_snapshot!(render(&build_timeline(&frame, 94.0)), @r"
        Saturday, 1 June 2024
        24 DHU AL-QADAH 1445 AH
        14:00  Europe/London  LIVE

        NEXT  ASR 17:00  IN 03H 00M
        [#####---------------]   25%

          FAJR     05:00  09H 00M AGO
          SUNRISE  06:10  07H 50M AGO
        ▶ DHUHR    13:00  01H 00M AGO
          ASR      17:00  IN 03H 00M
          MAGHRIB  21:00  IN 07H 00M
          ISHA     22:30  IN 08H 30M
        ");
    }

    #[test]
    fn test_after_isha_without_tomorrow() {
        let frame = controller_at(23, 0).frame().unwrap();
        insta::assert_snapshot!(render(&build_timeline(&frame, 94.0)), @r"
        Saturday, 1 June 2024
        24 DHU AL-QADAH 1445 AH
        23:00  Europe/London  LIVE

        NEXT  unknown, tomorrow's timetable is missing
        [####################]  100%

          FAJR     05:00  18H 00M AGO
          SUNRISE  06:10  16H 50M AGO
          DHUHR    13:00  10H 00M AGO
          ASR      17:00  06H 00M AGO
          MAGHRIB  21:00  02H 00M AGO
        ▶ ISHA     22:30  30M AGO
        note: Tomorrow's Fajr unavailable: No prayer times for 2024-06-02
        ");
    }

    #[test]
    fn test_inspecting_future_date() {
        let mut controller = controller_at(14, 0);
        let frame = controller
            .select_date(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .unwrap();
        insta::assert_snapshot!(render(&build_timeline(&frame, 94.0)), @r"
        Monday, 3 June 2024
        26 DHU AL-QADAH 1445 AH
        14:00  Europe/London  INSPECTING

        [--------------------]    0%

          FAJR     05:00  IN 39H 00M
          SUNRISE  06:10  IN 40H 10M
          DHUHR    13:00  IN 47H 00M
          ASR      17:00  IN 51H 00M
          MAGHRIB  21:00  IN 55H 00M
          ISHA     22:30  IN 56H 30M
        ");
    }
}
