// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Month-file storage layout
pub mod month_file;

// Provider implementations
pub mod json;
pub mod memory;

pub use error::{Error, Result};
pub use json::JsonTimetableProvider;
pub use memory::MemoryProvider;
pub use month_file::{DayRecord, MonthFile, MonthKey};
pub use traits::DayDataProvider;
