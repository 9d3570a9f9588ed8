use super::args::{Cli, Commands, OutputFormat, WatchMode};
use super::handlers::{self, HandlerContext, parse_date, parse_month};
use anyhow::Result;
use is_terminal::IsTerminal;
use waqt_runtime::{Config, expand_tilde, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;

    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = expand_tilde(data_dir);
    }
    if let Some(timezone) = cli.timezone {
        config.timezone = timezone;
    }
    log::debug!(
        "Using data dir {} in {}",
        config.data_dir().display(),
        config.timezone
    );

    let ctx = HandlerContext::new(cli.format, config, config_path)?;

    let Some(command) = cli.command else {
        return handlers::today::handle(&ctx);
    };

    match command {
        Commands::Today => handlers::today::handle(&ctx),

        Commands::Show { date } => handlers::show::handle(&ctx, parse_date(&date)?),

        Commands::Status { at } => handlers::status::handle(&ctx, at.as_deref()),

        Commands::Times { date } => {
            let date = match date {
                Some(raw) => Some(parse_date(&raw)?),
                None => None,
            };
            handlers::times::handle(&ctx, date)
        }

        Commands::Watch { mode } => {
            let use_tui = match mode {
                WatchMode::Tui => true,
                WatchMode::Console => false,
                WatchMode::Auto => {
                    cli.format == OutputFormat::Plain && std::io::stdout().is_terminal()
                }
            };
            if use_tui {
                handlers::watch_tui::handle(&ctx)
            } else {
                handlers::watch_console::handle(&ctx)
            }
        }

        Commands::Months => handlers::months::handle(&ctx),

        Commands::Check { month } => {
            let month = match month {
                Some(raw) => Some(parse_month(&raw)?),
                None => None,
            };
            handlers::check::handle(&ctx, month)
        }

        Commands::Config { command } => handlers::config::handle(&ctx, command),
    }
}
