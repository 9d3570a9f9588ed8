use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, StatusBadge, Tip,
};
use std::path::PathBuf;
use waqt_runtime::Config;

pub fn present_config(
    path: PathBuf,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path,
        exists,
        config,
    });

    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file, showing defaults"))
            .with_tip(Tip::new("Write these settings to disk").run("waqt config init"));
    }

    result
}

pub fn present_config_init(
    path: PathBuf,
    written: bool,
    config: Config,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let badge = if written {
        StatusBadge::ok(format!("Wrote {}", path.display()))
    } else {
        StatusBadge::warning(format!("{} already exists", path.display()))
    };

    let mut result = CommandResultViewModel::new(ConfigInitViewModel {
        path,
        written,
        config,
    })
    .with_badge(badge);

    if !written {
        result = result
            .with_tip(Tip::new("Replace it").run("waqt config init --force"));
    }

    result
}
