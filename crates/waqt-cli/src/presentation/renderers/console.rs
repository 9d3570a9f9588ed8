use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::args::OutputFormat;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, StatusBadge, StatusLevel, Tip,
};

/// Prints one-shot command results to stdout
pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        let icon = match badge.level {
            StatusLevel::Ok => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        };
        if self.options.enable_color {
            format!("{} {}", icon, badge.message.bold())
        } else {
            format!("{} {}", icon, badge.message)
        }
    }

    fn tip_line(&self, tip: &Tip) -> String {
        match (&tip.command, self.options.enable_color) {
            (Some(cmd), true) => format!("  • {}: {}", tip.text, cmd.cyan()),
            (Some(cmd), false) => format!("  • {}: {}", tip.text, cmd),
            (None, _) => format!("  • {}", tip.text),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{}\n", self.badge_line(badge));
        }

        print!("{}", result.content.create_view(self.options));

        if !result.tips.is_empty() {
            if self.options.enable_color {
                println!("\n{}", "💡 Tips:".yellow().bold());
            } else {
                println!("\nTips:");
            }
            for tip in &result.tips {
                println!("{}", self.tip_line(tip));
            }
        }

        Ok(())
    }
}
