//! Sample timetables for integration tests.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use waqt_providers::{JsonTimetableProvider, MonthFile, MonthKey};
use waqt_types::{ClockTime, DayTimes};

/// The month files under `crates/waqt-providers/tests/samples/`
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir
            .parent()
            .expect("testing crate lives under crates/")
            .join("waqt-providers/tests/samples");

        Self { samples_dir }
    }

    /// Copy `YYYY-MM.json` into `data_dir`
    pub fn copy_month(&self, month: &str, data_dir: &Path) -> Result<()> {
        let name = format!("{}.json", month);
        let source = self.samples_dir.join(&name);
        fs::copy(&source, data_dir.join(&name))
            .with_context(|| format!("Failed to copy sample {}", source.display()))?;
        Ok(())
    }
}

/// Write one month where every day uses the same clock-times
pub fn write_uniform_month(data_dir: &Path, month: &str, times: [&str; 6]) -> Result<()> {
    let key: MonthKey = month.parse()?;
    let times = times.map(|raw| raw.parse::<ClockTime>());
    let mut parsed = [ClockTime::MIDNIGHT; 6];
    for (slot, time) in parsed.iter_mut().zip(times) {
        *slot = time?;
    }

    let mut file = MonthFile::default();
    let mut date = NaiveDate::from_ymd_opt(key.year, key.month, 1).context("Invalid month")?;
    while key.contains(date) {
        file.insert(&DayTimes::new(date, parsed));
        date = date.succ_opt().context("Calendar overflow")?;
    }

    JsonTimetableProvider::new(data_dir).save_month(key, &file)?;
    Ok(())
}
