//! Platform configuration
//!
//! Loaded from an optional JSON file. Every field has its own default, so a
//! partial file such as `{"history_limit": 5}` is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::ProjectionDefaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Fallbacks for unreadable simulator fields
    #[serde(default)]
    pub projection: ProjectionDefaults,

    /// Maximum number of simulations kept in the history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize { 20 }

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionDefaults::default(),
            history_limit: default_history_limit(),
        }
    }
}

impl PlatformConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
