use super::HandlerContext;
use crate::presentation::presenters::present_timeline;
use anyhow::Result;
use waqt_runtime::SystemClock;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let mut controller = ctx.controller(SystemClock);
    let frame = controller.show_today()?;
    ctx.render(present_timeline(&frame, ctx.config.ring_radius))
}
