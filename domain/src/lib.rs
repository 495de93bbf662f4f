//! Domain layer for corosync-quorum
//!
//! This crate contains the configuration tree, its text format, option
//! validation and the quorum configuration facade. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Section tree
//!
//! A corosync.conf document is an ordered tree of [`Section`]s. Sibling
//! names may repeat (several `quorum` blocks are legal) and attribute keys
//! may repeat within a section.
//!
//! ## Facade
//!
//! [`ConfigFacade`] reads nodes, quorum options and quorum device settings
//! and applies validated changes. After every change it recomputes the
//! derived options (`two_node`, the `lms`/`2nodelms` algorithm) and prunes
//! sections left empty.
//!
//! ## Findings and force
//!
//! Validation yields [`Finding`]s. Forceable findings become warnings when
//! the caller passes the matching force flag; the rest always block.

pub mod config;
pub mod core;
pub mod facade;
pub mod node;
pub mod section;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::error::{FacadeError, ValidationFailure};
pub use facade::{ConfigFacade, QuorumDeviceSettings};
pub use node::{NodeAddress, NodeAddressList};
pub use section::{ParseError, Section};
pub use validation::{
    AllowedValues, Finding, FindingCode, ForceFlag, Forceability, OptionType, Severity, TextKind,
};
