//! Infrastructure layer for corosync-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod corosync;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_CONF_PATH, FileAuditConfig, FileConfig, FileCorosyncConfig,
    FileOutputConfig,
};
pub use corosync::CorosyncConfFile;
pub use logging::JsonlChangeLogger;
