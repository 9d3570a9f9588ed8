use super::HandlerContext;
use crate::presentation::presenters::present_check;
use crate::presentation::view_models::{MonthCheckViewModel, ProblemViewModel};
use anyhow::{Result, bail};
use waqt_providers::{JsonTimetableProvider, MonthKey};

pub fn handle(ctx: &HandlerContext, month: Option<MonthKey>) -> Result<()> {
    let provider = ctx.provider();
    let months = match month {
        Some(month) => vec![month],
        None => provider.list_months()?,
    };

    let checks: Vec<MonthCheckViewModel> = months
        .into_iter()
        .map(|month| check_month(&provider, month))
        .collect();

    let result = present_check(ctx.data_dir(), checks);
    let problems = result.content.problem_count;
    ctx.render(result)?;

    if problems > 0 {
        bail!("{} problem(s) found in timetable files", problems);
    }
    Ok(())
}

/// Every day of one month file must parse, sit in that month and be in order
pub fn check_month(provider: &JsonTimetableProvider, month: MonthKey) -> MonthCheckViewModel {
    let mut problems = Vec::new();

    let file = match provider.load_month(month) {
        Ok(file) => file,
        Err(e) => {
            return MonthCheckViewModel {
                month: month.to_string(),
                days_checked: 0,
                problems: vec![ProblemViewModel {
                    key: month.to_string(),
                    message: e.to_string(),
                }],
            };
        }
    };

    if let Some(name) = &file.timezone
        && name.parse::<chrono_tz::Tz>().is_err()
    {
        problems.push(ProblemViewModel {
            key: month.to_string(),
            message: format!("Unknown timezone '{}'", name),
        });
    }

    let entries = file.entries();
    let days_checked = entries.len();
    for (key, parsed) in entries {
        let message = match parsed {
            Err(e) => Some(e.to_string()),
            Ok(day) if !month.contains(day.date) => Some(format!("filed under {}", month)),
            Ok(day) => match day.validate() {
                Err(waqt_types::Error::MalformedSchedule { message, .. }) => Some(message),
                Err(e) => Some(e.to_string()),
                Ok(()) => None,
            },
        };
        if let Some(message) = message {
            problems.push(ProblemViewModel { key, message });
        }
    }

    MonthCheckViewModel {
        month: month.to_string(),
        days_checked,
        problems,
    }
}
