// Views turn view models into text; layout, colour and formatting live here

pub mod config;
pub mod timeline;
pub mod timetable;

pub use config::{ConfigInitView, ConfigView};
pub use timeline::TimelineView;
pub use timetable::{CheckReportView, MonthListView};
