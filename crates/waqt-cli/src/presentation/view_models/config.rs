use serde::Serialize;
use std::path::PathBuf;
use waqt_runtime::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub written: bool,
    pub config: Config,
}
