use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use std::path::PathBuf;
use waqt_providers::JsonTimetableProvider;
use waqt_runtime::{Clock, Config, ControllerOptions, DateModeController, SystemClock};

/// Everything a handler needs: effective config, operating timezone and output settings
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
    pub config: Config,
    pub config_path: PathBuf,
    pub tz: Tz,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config: Config, config_path: PathBuf) -> Result<Self> {
        let tz = config.tz()?;
        Ok(Self {
            format,
            options: DisplayOptions::detect(format),
            config,
            config_path,
            tz,
        })
    }

    pub fn data_dir(&self) -> PathBuf {
        self.config.data_dir()
    }

    pub fn provider(&self) -> JsonTimetableProvider {
        JsonTimetableProvider::new(self.data_dir()).with_default_timezone(self.tz.name())
    }

    pub fn controller<C: Clock + 'static>(&self, clock: C) -> DateModeController {
        DateModeController::new(
            self.provider(),
            clock,
            self.tz,
            ControllerOptions::from(&self.config),
        )
    }

    /// Today in the operating timezone
    pub fn today(&self) -> NaiveDate {
        SystemClock.now().with_timezone(&self.tz).date_naive()
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format, self.options);
        renderer.render(view_model)
    }
}
