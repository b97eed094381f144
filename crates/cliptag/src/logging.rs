//! Logging setup on top of `tracing-subscriber`.
//!
//! Logs go to stderr, either human-readable or as JSON lines. `RUST_LOG`
//! overrides the computed filter when set.

use cliptag_core::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directives for the workspace crates. Dependencies (hyper, axum)
/// stay at `warn` unless `RUST_LOG` says otherwise.
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,cliptag={level},cliptag_core={level}")
}

/// Whether the config or the `--verbose` flag asks for debug output.
fn wants_verbose(config: &LoggingConfig, verbose_flag: bool) -> bool {
    verbose_flag || matches!(config.level.as_str(), "debug" | "trace")
}

/// Install the global subscriber from the `[logging]` section plus CLI flags.
pub fn init_from_config(config: &cliptag_core::Config, verbose: bool, json_logs: bool) {
    let logging = &config.logging;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(wants_verbose(logging, verbose))));

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs || logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}
