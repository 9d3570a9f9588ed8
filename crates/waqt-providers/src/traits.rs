use crate::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use waqt_types::DayTimes;

/// Source of timetable data, one calendar day at a time.
///
/// Implementations must be idempotent: fetching the same date twice returns
/// the same data, which is what lets callers cache results forever.
pub trait DayDataProvider: Send + Sync {
    /// Short provider ID for logs (e.g., "json", "memory")
    fn id(&self) -> &'static str;

    /// Day data for `date`, or `Error::DataUnavailable` when there is no record
    fn fetch(&self, date: NaiveDate) -> Result<DayTimes>;
}

impl<P: DayDataProvider + ?Sized> DayDataProvider for Arc<P> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn fetch(&self, date: NaiveDate) -> Result<DayTimes> {
        (**self).fetch(date)
    }
}

impl<P: DayDataProvider + ?Sized> DayDataProvider for Box<P> {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn fetch(&self, date: NaiveDate) -> Result<DayTimes> {
        (**self).fetch(date)
    }
}
