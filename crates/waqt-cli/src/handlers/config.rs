use super::HandlerContext;
use crate::args::ConfigCommand;
use crate::presentation::presenters::{present_config, present_config_init};
use anyhow::Result;

pub fn handle(ctx: &HandlerContext, command: ConfigCommand) -> Result<()> {
    let path = ctx.config_path.clone();
    let exists = path.exists();

    match command {
        ConfigCommand::Show => ctx.render(present_config(path, exists, ctx.config.clone())),
        ConfigCommand::Init { force } => {
            let written = !exists || force;
            if written {
                ctx.config.save_to(&path)?;
                log::info!("Wrote config to {}", path.display());
            }
            ctx.render(present_config_init(path, written, ctx.config.clone()))
        }
    }
}
