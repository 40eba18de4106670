//! Server configuration read from the environment

use std::path::PathBuf;

pub const RESOURCE_ROOT_VAR: &str = "PDFTOOL_RESOURCE_ROOT";
pub const BIND_ADDR_VAR: &str = "PDFTOOL_BIND";

const DEFAULT_RESOURCE_ROOT: &str = "resources";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime settings of the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Directory that source identifiers are resolved against
    pub resource_root: PathBuf,
    /// Socket address the server listens on
    pub bind_addr: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from(DEFAULT_RESOURCE_ROOT),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read `PDFTOOL_RESOURCE_ROOT` and `PDFTOOL_BIND`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key| lookup(key).filter(|value: &String| !value.trim().is_empty());

        Self {
            resource_root: non_empty(RESOURCE_ROOT_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.resource_root),
            bind_addr: non_empty(BIND_ADDR_VAR).unwrap_or(defaults.bind_addr),
        }
    }
}
