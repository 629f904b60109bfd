use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StringsError, StringsResult};
use crate::logging::LoggingConfig;
use crate::strings::{FormatConfig, RepeatConfig};

/// Library configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    pub format: FormatConfig,
    pub repeat: RepeatConfig,
    pub logging: LoggingConfig,
}

impl StringsConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> StringsResult<Self> {
        let config: StringsConfig = toml::from_str(content)?;

        // Validate configuration
        config.validate()?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> StringsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> StringsResult<()> {
        self.format.validate()?;

        if self.repeat.max_len == 0 {
            return Err(StringsError::config("repeat max_len must be > 0"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(StringsError::config("logging level cannot be empty"));
        }

        Ok(())
    }
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply `NSS_*` environment variable overrides to configuration
    pub fn apply(config: &mut StringsConfig) {
        Self::apply_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides looked up through `lookup`
    pub fn apply_from<F>(config: &mut StringsConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Repeat overrides
        if let Some(max_len_str) = lookup("NSS_MAX_REPEAT_LEN") {
            if let Ok(max_len) = max_len_str.parse::<usize>() {
                config.repeat.max_len = max_len;
            }
        }

        // Format overrides
        if let Some(null_literal) = lookup("NSS_NULL_LITERAL") {
            config.format.null_literal = null_literal;
        }

        // Logging overrides
        if let Some(level) = lookup("NSS_LOG_LEVEL") {
            config.logging.level = level;
        }
    }
}
