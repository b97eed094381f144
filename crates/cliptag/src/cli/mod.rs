//! Command handlers.

pub mod config;
pub mod serve;

use std::path::Path;

use cliptag_core::Config;

/// Load the config from `path` if given, otherwise from the default location.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => Config::load()?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cliptag.toml");
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let err = load_config(Some(Path::new("/nonexistent/cliptag.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cliptag.toml"));
    }
}
