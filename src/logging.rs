use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub include_targets: bool,
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            include_targets: true,
            include_thread_ids: false,
        }
    }
}

/// Initialize a console subscriber for callers that have none of their own.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `Ok(false)` when a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level: {}", config.level))?,
    };

    let console_layer = fmt::layer()
        .with_target(config.include_targets)
        .with_thread_ids(config.include_thread_ids)
        .with_writer(std::io::stderr);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        info!("Logging system initialized");
        info!("Log level: {}", config.level);
    }

    Ok(installed)
}
