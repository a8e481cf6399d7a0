//! # l2-config
//!
//! Layered configuration loading for the L2 project catalog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`L2S_*` prefix, `__` as separator)
//! 2. Project-level `.l2s/config.toml`
//! 3. User-level `~/.config/l2s/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `L2S_FORMAT__SYMBOL` -> `format.symbol`,
//! `L2S_RENDER__NO_DATA_LABEL` -> `render.no_data_label`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use l2_config::L2Config;
//!
//! let config = L2Config::load_with_dotenv().expect("config");
//! println!("currency symbol: {}", config.format.symbol);
//! ```

mod catalog;
mod error;
mod format;
mod render;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use format::{FormatConfig, MAX_DECIMALS};
pub use render::RenderConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the project-local config file.
pub const LOCAL_CONFIG_DIR: &str = ".l2s";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct L2Config {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl L2Config {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit config file layered above the user and project
    /// files but still below environment variables.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider());
        Self::from_figment(&figment)
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.format.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::base_figment().merge(Self::env_provider())
    }

    /// Defaults plus the user-global and project-local files.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("L2S_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("l2s").join("config.toml"))
    }
}
