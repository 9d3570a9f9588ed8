mod clock;
mod day;
mod label;

pub use clock::ClockTime;
pub use day::DayTimes;
pub use label::PrayerLabel;
