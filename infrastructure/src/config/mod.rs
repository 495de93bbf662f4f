//! Configuration file loading for corosync-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COROSYNC_QUORUM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./corosync-quorum.toml` or `./.corosync-quorum.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/corosync-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_CONF_PATH, FileAuditConfig, FileConfig, FileCorosyncConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
