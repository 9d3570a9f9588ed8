use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{
    CheckReportViewModel, CreateView, DisplayOptions, MonthListViewModel,
};

pub struct MonthListView<'a> {
    data: &'a MonthListViewModel,
}

impl<'a> fmt::Display for MonthListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.data.data_dir.display())?;
        if self.data.months.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{:<10} {:<6} {:<16} FILE", "MONTH", "DAYS", "TIMEZONE")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for month in &self.data.months {
            writeln!(
                f,
                "{:<10} {:<6} {:<16} {}",
                month.month,
                month.days,
                month.timezone.as_deref().unwrap_or("(default)"),
                month.path.display()
            )?;
        }
        Ok(())
    }
}

impl CreateView for MonthListViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(MonthListView { data: self })
    }
}

pub struct CheckReportView<'a> {
    data: &'a CheckReportViewModel,
    options: DisplayOptions,
}

impl<'a> fmt::Display for CheckReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for month in &self.data.months {
            let verdict = if month.problems.is_empty() { "ok" } else { "FAILED" };
            let verdict = match (self.options.enable_color, month.problems.is_empty()) {
                (true, true) => format!("{}", verdict.green()),
                (true, false) => format!("{}", verdict.red().bold()),
                (false, _) => verdict.to_string(),
            };
            writeln!(
                f,
                "{}  {} day(s)  {}",
                month.month, month.days_checked, verdict
            )?;

            for problem in &month.problems {
                writeln!(f, "  {}: {}", problem.key, problem.message)?;
            }
        }
        Ok(())
    }
}

impl CreateView for CheckReportViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckReportView {
            data: self,
            options,
        })
    }
}
