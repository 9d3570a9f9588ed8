use crate::args::OutputFormat;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Text rendering switches shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub enable_color: bool,
}

impl DisplayOptions {
    /// Colour only for plain output on a terminal, and never with `NO_COLOR` set
    pub fn detect(format: OutputFormat) -> Self {
        Self {
            enable_color: format == OutputFormat::Plain
                && std::io::stdout().is_terminal()
                && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Ok,
    Info,
    Warning,
    Error,
}

/// One-line verdict printed above a command's output
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Ok, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }
}

/// Follow-up hint, optionally with the command to run
#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Tip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command: None,
        }
    }

    pub fn run(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
