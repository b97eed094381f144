//! Configuration management for Cliptag.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. A missing file is not an error; every section falls back to the
//! demo server's built-in values.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Cliptag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Tag catalog settings
    pub catalog: CatalogConfig,

    /// Classification settings
    pub classify: ClassifyConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.cliptag.cliptag/config.toml
    /// - Linux: ~/.config/cliptag/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\cliptag\config\config.toml
    ///
    /// Falls back to ~/.cliptag/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cliptag", "cliptag")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".cliptag").join("config.toml")
            })
    }

    /// Resolve the tag file path.
    ///
    /// `~` is expanded. A relative path is looked up next to the running
    /// executable first and falls back to the working directory.
    pub fn catalog_path(&self) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        self.catalog_path_from(exe_dir.as_deref())
    }

    fn catalog_path_from(&self, exe_dir: Option<&Path>) -> PathBuf {
        let path_str = self.catalog.path.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&path_str).into_owned());
        if expanded.is_absolute() {
            return expanded;
        }

        match exe_dir.map(|dir| dir.join(&expanded)) {
            Some(candidate) if candidate.exists() => candidate,
            _ => expanded,
        }
    }

    /// The `host:port` string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
