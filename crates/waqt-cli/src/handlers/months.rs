use super::HandlerContext;
use crate::presentation::presenters::present_months;
use crate::presentation::view_models::MonthEntryViewModel;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let provider = ctx.provider();

    let mut entries = Vec::new();
    for month in provider.list_months()? {
        let (days, timezone) = match provider.load_month(month) {
            Ok(file) => (file.days.len(), file.timezone),
            Err(e) => {
                log::warn!("Cannot read {}: {}", provider.month_path(month).display(), e);
                (0, None)
            }
        };
        entries.push(MonthEntryViewModel {
            month: month.to_string(),
            path: provider.month_path(month),
            days,
            timezone,
        });
    }

    ctx.render(present_months(ctx.data_dir(), entries))
}
