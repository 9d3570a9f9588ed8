use chrono::NaiveDate;
use std::fmt;

/// Result type for waqt-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A wall-clock value that is not `HH:MM`
    InvalidClockTime(String),

    /// A prayer label that is not one of the six known keys
    UnknownLabel(String),

    /// Day data breaks the ordering invariant (Fajr <= Sunrise <= ... <= Isha)
    MalformedSchedule { date: NaiveDate, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidClockTime(raw) => write!(f, "Invalid clock time: '{}'", raw),
            Error::UnknownLabel(raw) => write!(f, "Unknown prayer label: '{}'", raw),
            Error::MalformedSchedule { date, message } => {
                write!(f, "Malformed schedule for {}: {}", date, message)
            }
        }
    }
}

impl std::error::Error for Error {}
