use crate::month_file::{MonthFile, MonthKey};
use crate::traits::DayDataProvider;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use waqt_types::DayTimes;

/// Reads the month-file layout: `<root>/YYYY-MM.json`, one file per month
#[derive(Debug, Clone)]
pub struct JsonTimetableProvider {
    root: PathBuf,
    default_timezone: Option<String>,
}

impl JsonTimetableProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_timezone: None,
        }
    }

    /// Timezone label attached to days whose month file does not name one
    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = Some(timezone.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn month_path(&self, month: MonthKey) -> PathBuf {
        self.root.join(month.file_name())
    }

    pub fn load_month(&self, month: MonthKey) -> Result<MonthFile> {
        let path = self.month_path(month);
        if !path.exists() {
            return Err(Error::DataUnavailable(format!(
                "No timetable file for {}",
                month
            )));
        }

        let content = std::fs::read_to_string(&path).map_err(Error::file(&path))?;
        let file: MonthFile = serde_json::from_str(&content).map_err(Error::json(&path))?;
        Ok(file)
    }

    /// Write (or overwrite) a month file
    pub fn save_month(&self, month: MonthKey, file: &MonthFile) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(Error::file(&self.root))?;
        let path = self.month_path(month);
        let content = serde_json::to_string_pretty(file).map_err(Error::json(&path))?;
        std::fs::write(&path, content).map_err(Error::file(&path))?;
        Ok(())
    }

    /// Months with a timetable file, oldest first
    pub fn list_months(&self) -> Result<Vec<MonthKey>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut months = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(stem) = entry
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(".json"))
            else {
                continue;
            };
            match stem.parse::<MonthKey>() {
                Ok(month) => months.push(month),
                Err(_) => log::debug!("Skipping non-timetable file {}", entry.path().display()),
            }
        }

        months.sort();
        Ok(months)
    }
}

impl DayDataProvider for JsonTimetableProvider {
    fn id(&self) -> &'static str {
        "json"
    }

    fn fetch(&self, date: NaiveDate) -> Result<DayTimes> {
        let month = MonthKey::from_date(date);
        let file = self.load_month(month)?;
        log::debug!("Loaded {} ({} days)", self.month_path(month).display(), file.days.len());

        let record = file.record(date).ok_or_else(|| {
            Error::DataUnavailable(format!("No prayer times for {}", date.format("%Y-%m-%d")))
        })?;

        let day = record.to_day_times(date)?;
        day.validate().map_err(|e| Error::Parse(e.to_string()))?;
        let timezone = file.timezone.clone().or_else(|| self.default_timezone.clone());
        Ok(match timezone {
            Some(tz) => day.with_timezone(tz),
            None => day,
        })
    }
}
