use crate::cache::DateCache;
use crate::clock::Clock;
use crate::config::{Config, NightBaseline};
use crate::frame::Frame;
use crate::{Error, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use waqt_engine::{NightContext, build_schedule, evaluate, resolve};
use waqt_providers::DayDataProvider;
use waqt_types::{DayTimes, Schedule, Status};

/// Which date the controller is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "date", rename_all = "lowercase")]
pub enum Mode {
    /// Tracks today and re-evaluates on every tick
    Live,
    /// Frozen on a date other than today
    Inspect(NaiveDate),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerOptions {
    pub night_baseline: NightBaseline,
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            night_baseline: config.night_baseline,
        }
    }
}

/// A neighbouring day that could not be loaded
struct NeighbourMiss {
    reason: String,
    /// False when the failure was remembered from an earlier tick
    first: bool,
}

/// Owns the Live/Inspect state machine and the per-session day cache.
///
/// Every provider call goes through the cache, so a date is fetched at most
/// once per controller. A neighbouring day (tomorrow's Fajr, yesterday's
/// Isha) that failed to load is remembered and not retried by ticks; an
/// explicit `select_date` or `show_today` clears that memory.
pub struct DateModeController {
    provider: Box<dyn DayDataProvider>,
    clock: Arc<dyn Clock>,
    tz: Tz,
    options: ControllerOptions,
    mode: Mode,
    cache: DateCache,
    unavailable: HashMap<NaiveDate, String>,
    fetch_count: usize,
}

impl DateModeController {
    pub fn new<P, C>(provider: P, clock: C, tz: Tz, options: ControllerOptions) -> Self
    where
        P: DayDataProvider + 'static,
        C: Clock + 'static,
    {
        Self {
            provider: Box::new(provider),
            clock: Arc::new(clock),
            tz,
            options,
            mode: Mode::Live,
            cache: DateCache::new(),
            unavailable: HashMap::new(),
            fetch_count: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Operating-timezone date of the clock's now
    pub fn today(&self) -> NaiveDate {
        self.local_date(self.clock.now())
    }

    /// Date the selector shows
    pub fn selected_date(&self) -> NaiveDate {
        match self.mode {
            Mode::Live => self.today(),
            Mode::Inspect(date) => date,
        }
    }

    pub fn cached_dates(&self) -> Vec<NaiveDate> {
        self.cache.dates()
    }

    /// Provider calls issued so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    /// Switch to `date`. Today always means Live.
    ///
    /// The date is fetched before the mode changes; on failure the current
    /// mode is kept and the error is returned.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<Frame> {
        self.unavailable.clear();
        if date == self.today() {
            return self.show_today();
        }

        let day = match self.day(date) {
            Ok(day) => day,
            Err(err) => {
                log::warn!("Cannot show {}: {}", date, err);
                return Err(err);
            }
        };

        self.mode = Mode::Inspect(date);
        Ok(self.inspect_frame(&day))
    }

    pub fn show_today(&mut self) -> Result<Frame> {
        self.unavailable.clear();
        self.mode = Mode::Live;
        self.live_frame()
    }

    /// Periodic re-evaluation. Inspect mode has nothing new to show until
    /// midnight turns the inspected date into today, which means Live.
    pub fn tick(&mut self) -> Option<Result<Frame>> {
        match self.mode {
            Mode::Live => Some(self.live_frame()),
            Mode::Inspect(date) if date == self.today() => {
                log::debug!("{} is now today, switching to live", date);
                self.mode = Mode::Live;
                Some(self.live_frame())
            }
            Mode::Inspect(_) => None,
        }
    }

    /// Evaluate the current mode once
    pub fn frame(&mut self) -> Result<Frame> {
        match self.mode {
            Mode::Live => self.live_frame(),
            Mode::Inspect(date) => {
                let day = self.day(date)?;
                Ok(self.inspect_frame(&day))
            }
        }
    }

    /// Move the selector by `days` (negative goes back)
    pub fn step_date(&mut self, days: i64) -> Result<Frame> {
        let from = self.selected_date();
        let target = Duration::try_days(days)
            .and_then(|delta| from.checked_add_signed(delta))
            .ok_or(Error::DateOutOfRange { from, days })?;
        self.select_date(target)
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Read-through cache lookup
    fn day(&mut self, date: NaiveDate) -> Result<DayTimes> {
        if let Some(day) = self.cache.get(date) {
            log::debug!("Cache hit for {}", date);
            return Ok(day.clone());
        }

        log::debug!("Fetching {} from {} provider", date, self.provider.id());
        self.fetch_count += 1;
        let day = self.provider.fetch(date)?;
        Ok(self.cache.insert(date, day).clone())
    }

    fn schedule_for(&mut self, date: NaiveDate) -> Result<Schedule> {
        let day = self.day(date)?;
        Ok(build_schedule(&day, &self.tz))
    }

    /// Schedule of a day next to today; a failure is returned as text and
    /// remembered, so later ticks skip the provider. `Ok(None)` past the
    /// calendar's range.
    fn neighbour_schedule(
        &mut self,
        date: Option<NaiveDate>,
    ) -> std::result::Result<Option<Schedule>, NeighbourMiss> {
        let Some(date) = date else { return Ok(None) };
        if let Some(reason) = self.unavailable.get(&date) {
            return Err(NeighbourMiss {
                reason: reason.clone(),
                first: false,
            });
        }
        match self.schedule_for(date) {
            Ok(schedule) => Ok(Some(schedule)),
            Err(err) => {
                let reason = err.to_string();
                self.unavailable.insert(date, reason.clone());
                Err(NeighbourMiss {
                    reason,
                    first: true,
                })
            }
        }
    }

    fn live_frame(&mut self) -> Result<Frame> {
        let now = self.clock.now();
        let today = self.local_date(now);
        let schedule = self.schedule_for(today)?;
        let resolution = resolve(&schedule, now);
        let mut notes = Vec::new();

        let tomorrow = if resolution.next_is_tomorrow {
            match self.neighbour_schedule(today.succ_opt()) {
                Ok(schedule) => schedule,
                Err(miss) => {
                    if miss.first {
                        log::warn!("Tomorrow's Fajr unavailable: {}", miss.reason);
                    }
                    notes.push(format!("Tomorrow's Fajr unavailable: {}", miss.reason));
                    None
                }
            }
        } else {
            None
        };

        let previous_isha = if self.options.night_baseline == NightBaseline::PreviousIsha
            && resolution.active_index.is_none()
        {
            match self.neighbour_schedule(today.pred_opt()) {
                Ok(yesterday) => yesterday.and_then(|s| s.last().map(|e| e.instant)),
                Err(miss) => {
                    if miss.first {
                        log::debug!(
                            "Previous Isha unavailable, measuring from midnight: {}",
                            miss.reason
                        );
                    }
                    None
                }
            }
        } else {
            None
        };

        let night = NightContext {
            tomorrow: tomorrow.as_ref(),
            previous_isha,
        };
        let status = evaluate(&schedule, now, &self.tz, night);
        Ok(Frame::new(Mode::Live, schedule, status, now, &self.tz).with_notes(notes))
    }

    fn inspect_frame(&self, day: &DayTimes) -> Frame {
        let now = self.clock.now();
        let schedule = build_schedule(day, &self.tz);
        let resolution = resolve(&schedule, now);

        // Static ring: a past day is complete, a future one has not started
        let progress = if day.date < self.local_date(now) { 1.0 } else { 0.0 };
        let status = Status::from_resolution(resolution, resolution.next_event, progress);

        Frame::new(Mode::Inspect(day.date), schedule, status, now, &self.tz)
    }
}
