use crate::{Error, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. WAQT_CONFIG environment variable (with tilde expansion)
/// 3. `<config_dir>/waqt/config.toml`
/// 4. ~/.waqt/config.toml (fallback for systems without a config dir)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("WAQT_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("waqt").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".waqt").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// What the progress ring measures from before Fajr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightBaseline {
    /// Local midnight of the displayed day
    #[default]
    Midnight,
    /// Yesterday's Isha, falling back to midnight when yesterday has no record
    PreviousIsha,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub timezone: String,
    pub tick_interval_ms: u64,
    pub night_baseline: NightBaseline,
    pub ring_radius: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            timezone: "Europe/London".to_string(),
            tick_interval_ms: 1000,
            night_baseline: NightBaseline::default(),
            ring_radius: waqt_engine::DEFAULT_RING_RADIUS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Operating timezone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| Error::Config(format!("Unknown timezone '{}'", self.timezone)))
    }

    /// Data directory with `~/` expanded
    pub fn data_dir(&self) -> PathBuf {
        match self.data_dir.to_str() {
            Some(raw) => expand_tilde(raw),
            None => self.data_dir.clone(),
        }
    }

    /// Live tick period; zero is bumped to one millisecond
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timezone, "Europe/London");
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.night_baseline, NightBaseline::Midnight);
        assert_eq!(config.tz().unwrap(), chrono_tz::Europe::London);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            data_dir: PathBuf::from("/srv/timetables"),
            timezone: "Asia/Karachi".to_string(),
            tick_interval_ms: 250,
            night_baseline: NightBaseline::PreviousIsha,
            ring_radius: 50.0,
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "night_baseline = \"previous_isha\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.night_baseline, NightBaseline::PreviousIsha);
        assert_eq!(loaded.timezone, "Europe/London");
        Ok(())
    }

    #[test]
    fn test_unknown_timezone() {
        let config = Config {
            timezone: "Mars/Olympus".to_string(),
            ..Config::default()
        };
        let err = config.tz().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown timezone 'Mars/Olympus'"
        );
    }

    #[test]
    fn test_broken_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "tick_interval_ms = \"soon\"")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/waqt.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/waqt.toml"));
        Ok(())
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(expand_tilde("~/data"), PathBuf::from(home).join("data"));
        }
        assert_eq!(expand_tilde("data"), PathBuf::from("data"));
    }
}
