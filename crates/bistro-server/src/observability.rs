//! Tracing setup for the Bistro server.
//!
//! The subscriber holds a reloadable `EnvFilter` so the level from
//! `[logging]` can be applied after the configuration has been loaded.
//! `RUST_LOG`, when set, always wins over the configured level.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use crate::config::LoggingConfig;

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Crates whose output at `debug`/`info` is transport chatter.
const TRANSPORT_CRATES: &[&str] = &["hyper", "hyper_util", "h2", "tower"];

/// Builds filter directives for `level`.
///
/// Transport crates are capped at `warn` unless `trace` is requested, so a
/// `debug` run shows directory and resolver logs rather than connection noise.
pub fn filter_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    if level == "trace" || level == "off" {
        return level;
    }
    let mut directives = level;
    for krate in TRANSPORT_CRATES {
        directives.push_str(&format!(",{krate}=warn"));
    }
    directives
}

/// Installs the global subscriber at the default `info` level.
pub fn init_tracing() {
    init_tracing_with_level("info");
}

pub fn init_tracing_with_level(level: &str) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
    } else {
        EnvFilter::new(filter_directives(level))
    };

    let (filter_layer, handle) = reload::Layer::new(filter);
    let _ = FILTER_HANDLE.set(handle);

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Swaps the active filter for the one described by `logging`.
///
/// Returns `false` when nothing changed: tracing is not initialized yet, or
/// `RUST_LOG` overrides the configuration.
pub fn apply_logging_config(logging: &LoggingConfig) -> bool {
    if std::env::var_os("RUST_LOG").is_some() {
        return false;
    }
    let Some(handle) = FILTER_HANDLE.get() else {
        return false;
    };
    let directives = filter_directives(&logging.level);
    let applied = handle
        .modify(|filter| *filter = EnvFilter::new(&directives))
        .is_ok();
    if applied {
        tracing::debug!(filter = %directives, "logging level applied");
    }
    applied
}
