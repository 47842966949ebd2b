//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file merged with `FILESCOPE__*` environment variables.
//! Every field carries a serde default, so running without a file is valid.

pub mod browser;
pub mod logging;
pub mod search;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::browser::BrowserConfig;
use self::logging::LoggingConfig;
use self::search::SearchConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory tree browsing settings.
    #[serde(default)]
    pub browser: BrowserConfig,
    /// File search settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `FILESCOPE__` override file values, e.g.
    /// `FILESCOPE__BROWSER__MAX_PREFETCH_DEPTH=3`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let config = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("FILESCOPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
