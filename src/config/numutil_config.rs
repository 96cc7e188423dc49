// src/config/numutil_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Main numutil configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumUtilConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Console output formatting
    pub output: OutputConfig,

    /// Sieve limits
    pub sieve: SieveConfig,
}

/// Console output formatting for the driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Separator placed between printed sequence elements (default: " ")
    pub separator: String,
}

/// Sieve configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Largest bound the driver will sieve up to (default: 10,000,000)
    pub max_limit: i64,
}

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SEPARATOR: &str = " ";
const DEFAULT_SIEVE_LIMIT: i64 = 10_000_000;

impl Default for NumUtilConfig {
    fn default() -> Self {
        NumUtilConfig {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output: OutputConfig::default(),
            sieve: SieveConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            max_limit: DEFAULT_SIEVE_LIMIT,
        }
    }
}

impl NumUtilConfig {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("output.separator", DEFAULT_SEPARATOR)?
            .set_default("sieve.max_limit", DEFAULT_SIEVE_LIMIT)
    }

    fn with_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        // NUMUTIL_SIEVE__MAX_LIMIT -> sieve.max_limit
        builder.add_source(
            Environment::with_prefix("NUMUTIL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("numutil.toml").exists() {
            builder = builder.add_source(File::with_name("numutil.toml"));
        } else if Path::new("numutil.yaml").exists() {
            builder = builder.add_source(File::with_name("numutil.yaml"));
        }

        Self::with_environment(builder).build()?.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::with_environment(builder).build()?.try_deserialize()
    }
}
