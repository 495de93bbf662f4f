//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod inspect_config;
pub(crate) mod shared;
pub mod update_quorum;
