use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, DisplayOptions,
};

fn write_toml(f: &mut fmt::Formatter, config: &waqt_runtime::Config) -> fmt::Result {
    match toml::to_string_pretty(config) {
        Ok(text) => write!(f, "{}", text),
        Err(_) => Err(fmt::Error),
    }
}

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let origin = if self.data.exists { "" } else { " (not present)" };
        writeln!(f, "# {}{}", self.data.path.display(), origin)?;
        write_toml(f, &self.data.config)
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.written {
            write_toml(f, &self.data.config)
        } else {
            Ok(())
        }
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}
