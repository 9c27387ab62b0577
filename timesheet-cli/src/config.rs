use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use timesheet::{domain::PeriodKind, DEFAULT_OVERFLOW_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// View used when `--view` is not given
    #[serde(default = "default_view")]
    pub default_view: PeriodKind,
    /// Entries shown per day before the rest go into the overflow panel
    #[serde(default = "default_overflow_limit")]
    pub overflow_limit: usize,
    /// Entries file used when `--entries` is not given
    #[serde(default)]
    pub entries_path: Option<PathBuf>,
    /// tracing filter, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_view() -> PeriodKind {
    PeriodKind::Weekly
}

fn default_overflow_limit() -> usize {
    DEFAULT_OVERFLOW_LIMIT
}

fn default_log_filter() -> String {
    "timesheet=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            overflow_limit: default_overflow_limit(),
            entries_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("timesheet")
            .join("config.toml"))
    }

    /// Load settings: defaults, then the config file if it exists, then
    /// `TIMESHEET_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_with(&Self::config_path()?, None)
    }

    /// Like [`Settings::load`] with an explicit file, and an explicit
    /// environment map instead of the process environment when given.
    pub fn load_with(path: &Path, env: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(false))
            .add_source(
                config::Environment::with_prefix("TIMESHEET")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        settings
            .try_deserialize::<Settings>()
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns whether a file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(true)
    }
}
