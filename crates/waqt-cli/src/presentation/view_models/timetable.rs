use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct MonthListViewModel {
    pub data_dir: PathBuf,
    pub months: Vec<MonthEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthEntryViewModel {
    pub month: String,
    pub path: PathBuf,
    pub days: usize,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReportViewModel {
    pub data_dir: PathBuf,
    pub months: Vec<MonthCheckViewModel>,
    pub days_checked: usize,
    pub problem_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthCheckViewModel {
    pub month: String,
    pub days_checked: usize,
    pub problems: Vec<ProblemViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProblemViewModel {
    /// Date key as written in the file, or the month when the file itself is unreadable
    pub key: String,
    pub message: String,
}
