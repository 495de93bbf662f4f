//! Config store port
//!
//! Defines where corosync configuration text comes from and goes to. The
//! facade itself never performs I/O; use cases go through this port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while reading or writing the configuration
#[derive(Error, Debug)]
pub enum ConfigStoreError {
    #[error("Failed to read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Storage holding one corosync configuration document
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ConfigStorePort: Send + Sync {
    /// Read the whole configuration text
    async fn load(&self) -> Result<String, ConfigStoreError>;

    /// Replace the configuration text
    async fn save(&self, text: &str) -> Result<(), ConfigStoreError>;

    /// Human-readable description of where the configuration lives
    fn location(&self) -> String;
}
