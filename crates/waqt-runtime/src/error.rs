use std::fmt;

/// Result type for waqt-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Provider layer error (including "no data for date")
    Provider(waqt_providers::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Background ticker could not be started
    Ticker(String),

    /// Stepping the selector left the calendar range
    DateOutOfRange { from: chrono::NaiveDate, days: i64 },
}

impl Error {
    /// The requested date has no timetable record
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::Provider(err) if err.is_data_unavailable())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Ticker(msg) => write!(f, "Ticker error: {}", msg),
            Error::DateOutOfRange { from, days } => {
                write!(f, "Cannot move {} days from {}", days, from)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Ticker(_) | Error::DateOutOfRange { .. } => None,
        }
    }
}

impl From<waqt_providers::Error> for Error {
    fn from(err: waqt_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
