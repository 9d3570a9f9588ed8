pub mod config;
pub mod timeline;
pub mod timetable;

pub use config::{present_config, present_config_init};
pub use timeline::{build_timeline, present_timeline};
pub use timetable::{present_check, present_months};
