//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only command output.

use crate::config::KeytoolConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter for `config.log_level`.
///
/// `RUST_LOG` is not read here; `KeytoolConfig` already falls back to it
/// when neither the flag nor `K7_LOG_LEVEL` is set.
pub fn build_filter(config: &KeytoolConfig) -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_new(&config.log_level)?)
}

/// Install the global subscriber.
pub fn init_logging(config: &KeytoolConfig) -> anyhow::Result<()> {
    let env_filter = build_filter(config)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::debug!(level = %config.log_level, json = config.json_logs, "logging initialized");
    Ok(())
}
