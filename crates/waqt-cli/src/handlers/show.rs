use super::HandlerContext;
use crate::presentation::presenters::present_timeline;
use anyhow::Result;
use chrono::NaiveDate;
use waqt_runtime::SystemClock;

pub fn handle(ctx: &HandlerContext, date: NaiveDate) -> Result<()> {
    let mut controller = ctx.controller(SystemClock);
    let frame = controller.select_date(date)?;
    ctx.render(present_timeline(&frame, ctx.config.ring_radius))
}
