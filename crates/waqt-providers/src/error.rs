use std::fmt;
use std::path::PathBuf;

/// Result type for waqt-providers operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// No timetable record exists for the requested date
    DataUnavailable(String),

    /// A month file exists but could not be read or written
    File { path: PathBuf, source: std::io::Error },

    /// A month file is not valid JSON for the month-file layout
    Json { path: PathBuf, source: serde_json::Error },

    /// A record was found but holds values that are not valid day data
    Parse(String),

    /// Listing the data directory failed
    Scan(walkdir::Error),
}

impl Error {
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::DataUnavailable(_))
    }

    pub(crate) fn file(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::File { path, source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| Error::Json { path, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DataUnavailable(msg) => write!(f, "{}", msg),
            Error::File { path, source } => write!(f, "Cannot access {}: {}", path.display(), source),
            Error::Json { path, source } => write!(f, "Invalid month file {}: {}", path.display(), source),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Scan(err) => write!(f, "Cannot list timetable files: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::File { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
            Error::Scan(err) => Some(err),
            Error::DataUnavailable(_) | Error::Parse(_) => None,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Scan(err)
    }
}
