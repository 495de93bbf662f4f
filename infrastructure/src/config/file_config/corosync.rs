//! Corosync configuration from TOML (`[corosync]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the cluster configuration file
pub const DEFAULT_CONF_PATH: &str = "/etc/corosync/corosync.conf";

/// Raw corosync configuration from TOML
///
/// # Example
///
/// ```toml
/// [corosync]
/// conf_path = "/etc/corosync/corosync.conf"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorosyncConfig {
    /// Path of corosync.conf to read and write
    pub conf_path: String,
}

impl Default for FileCorosyncConfig {
    fn default() -> Self {
        Self {
            conf_path: DEFAULT_CONF_PATH.to_string(),
        }
    }
}

impl FileCorosyncConfig {
    pub fn conf_path(&self) -> PathBuf {
        PathBuf::from(&self.conf_path)
    }
}
