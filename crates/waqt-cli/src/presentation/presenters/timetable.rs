use crate::presentation::view_models::{
    CheckReportViewModel, CommandResultViewModel, MonthCheckViewModel, MonthEntryViewModel,
    MonthListViewModel, StatusBadge, Tip,
};
use std::path::PathBuf;

pub fn present_months(
    data_dir: PathBuf,
    months: Vec<MonthEntryViewModel>,
) -> CommandResultViewModel<MonthListViewModel> {
    let count = months.len();
    let mut result = CommandResultViewModel::new(MonthListViewModel { data_dir, months });

    if count == 0 {
        result = result
            .with_badge(StatusBadge::warning("No timetable files found"))
            .with_tip(
                Tip::new("Put one YYYY-MM.json file per month in the data directory")
                    .run("waqt --data-dir <PATH> months"),
            );
    } else {
        result = result.with_badge(StatusBadge::ok(format!("{} month(s) available", count)));
    }

    result
}

pub fn present_check(
    data_dir: PathBuf,
    months: Vec<MonthCheckViewModel>,
) -> CommandResultViewModel<CheckReportViewModel> {
    let days_checked = months.iter().map(|m| m.days_checked).sum();
    let problem_count = months.iter().map(|m| m.problems.len()).sum();

    let badge = if months.is_empty() {
        StatusBadge::warning("Nothing to check")
    } else if problem_count == 0 {
        StatusBadge::ok(format!(
            "{} day(s) in {} month(s) look good",
            days_checked,
            months.len()
        ))
    } else {
        StatusBadge::error(format!("{} problem(s) found", problem_count))
    };

    CommandResultViewModel::new(CheckReportViewModel {
        data_dir,
        months,
        days_checked,
        problem_count,
    })
    .with_badge(badge)
}
