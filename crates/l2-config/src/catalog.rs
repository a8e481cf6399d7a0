//! Record sources for the project catalog.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const fn default_include_builtin() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Seed the catalog with the records compiled into the binary.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    /// Extra TOML or JSON record files, loaded in order.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            paths: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Whether any external record files are configured.
    #[must_use]
    pub fn has_external_sources(&self) -> bool {
        !self.paths.is_empty()
    }
}
