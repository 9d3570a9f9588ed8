use super::HandlerContext;
use crate::presentation::TuiRenderer;
use anyhow::Result;
use waqt_runtime::{LiveTicker, SystemClock, drive};

/// Full-screen live mode
pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let mut controller = ctx.controller(SystemClock);
    let ticker = LiveTicker::start(ctx.config.tick_interval())?;

    let mut tui = TuiRenderer::new(ticker.sender(), ctx.config.ring_radius)?;
    drive(&mut controller, ticker.receiver(), &mut tui)?;
    Ok(())
}
