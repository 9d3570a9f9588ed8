mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "waqt")]
#[command(about = "Prayer-time timeline: the active prayer, the next one and how far along you are", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding YYYY-MM.json timetable files (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Config file (default: $WAQT_CONFIG or <config dir>/waqt/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Operating timezone, IANA name (overrides config)
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
