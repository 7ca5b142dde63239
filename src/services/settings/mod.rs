// Settings service module
// Loads and saves `config.toml` and resolves paths and theme against the platform

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::{AppConfig, ThemePreference};

const CONFIG_FILE: &str = "config.toml";

/// Platform directories for config and data.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "uCalendar", "uCalendar")
}

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service over the platform config file, falling back to the working
    /// directory when no home directory can be determined.
    pub fn from_platform() -> Self {
        let path = project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the config. A missing file yields the defaults.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config: {}", e))?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but any problem is logged and the defaults
    /// are used instead.
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}, using defaults", e);
                AppConfig::default()
            }
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Absolute database path. Relative paths live in the platform data dir
/// (created on demand), or the working directory when there is none.
pub fn resolve_database_path(config: &AppConfig, data_dir: Option<&Path>) -> Result<String> {
    let configured = Path::new(&config.database_path);
    if configured.is_absolute() || config.database_path == ":memory:" {
        return Ok(config.database_path.clone());
    }

    match data_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
            Ok(dir.join(configured).to_string_lossy().to_string())
        }
        None => Ok(config.database_path.clone()),
    }
}

/// Whether the dark palette should be used at startup.
pub fn resolve_dark_mode(preference: ThemePreference) -> bool {
    match preference {
        ThemePreference::Light => false,
        ThemePreference::Dark => true,
        ThemePreference::System => matches!(dark_light::detect(), dark_light::Mode::Dark),
    }
}
