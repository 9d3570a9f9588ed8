use super::HandlerContext;
use anyhow::Result;
use chrono::NaiveDate;
use waqt_providers::DayDataProvider;

/// Raw day record, in the flat JSON shape API consumers expect
pub fn handle(ctx: &HandlerContext, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| ctx.today());
    let day = ctx.provider().fetch(date)?;
    println!("{}", serde_json::to_string_pretty(&day)?);
    Ok(())
}
