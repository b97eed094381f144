//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    ///
    /// Runs on load; call again after applying overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_body_bytes must be > 0".into(),
            ));
        }
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.path must not be empty".into(),
            ));
        }
        if self.classify.default_top_k == 0 {
            return Err(ConfigError::ValidationError(
                "classify.default_top_k must be > 0".into(),
            ));
        }
        let (min, max) = (self.classify.min_score, self.classify.max_score);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
            return Err(ConfigError::ValidationError(
                "classify.min_score and classify.max_score must be between 0.0 and 1.0".into(),
            ));
        }
        if min >= max {
            return Err(ConfigError::ValidationError(format!(
                "classify.min_score ({min}) must be below classify.max_score ({max})"
            )));
        }
        Ok(())
    }
}
