use super::enums::WatchMode;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show today's timeline: active prayer, next prayer and progress")]
    Today,

    #[command(about = "Show the timeline of a date (YYYY-MM-DD); today stays live")]
    Show {
        #[arg(help = "Date to show, YYYY-MM-DD")]
        date: String,
    },

    #[command(about = "Evaluate the live status at a given instant")]
    Status {
        #[arg(
            long,
            help = "Instant to evaluate: RFC 3339, or YYYY-MM-DDTHH:MM in the operating timezone"
        )]
        at: Option<String>,
    },

    #[command(about = "Print the raw prayer times of a date as JSON")]
    Times {
        #[arg(help = "Date, YYYY-MM-DD (default: today)")]
        date: Option<String>,
    },

    #[command(about = "Keep the timeline on screen and refresh it every tick")]
    Watch {
        #[arg(long, value_enum, default_value = "auto")]
        mode: WatchMode,
    },

    #[command(about = "List months with a timetable file")]
    Months,

    #[command(about = "Validate timetable files (times present, parseable and in order)")]
    Check {
        #[arg(help = "Month to check, YYYY-MM (default: every month)")]
        month: Option<String>,
    },

    #[command(about = "Show or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config file with the effective settings")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
