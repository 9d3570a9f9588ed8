pub mod common;
pub mod config;
pub mod result;
pub mod timeline;
pub mod timetable;

pub use common::{DisplayOptions, StatusBadge, StatusLevel, Tip};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use result::CommandResultViewModel;
pub use timeline::{
    HijriViewModel, NextPrayerViewModel, PrayerRowViewModel, ProgressViewModel, TimelineMode,
    TimelineViewModel,
};
pub use timetable::{
    CheckReportViewModel, MonthCheckViewModel, MonthEntryViewModel, MonthListViewModel,
    ProblemViewModel,
};

use std::fmt;

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
