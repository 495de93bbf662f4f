//! Application layer for corosync-quorum
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    change_logger::{ChangeEvent, ChangeLogger, NoChangeLogger},
    config_store::{ConfigStoreError, ConfigStorePort},
};
pub use use_cases::inspect_config::{InspectConfigUseCase, QuorumConfigView};
pub use use_cases::shared::QuorumConfigError;
pub use use_cases::update_quorum::{QuorumCommand, UpdateQuorumOutput, UpdateQuorumUseCase};
