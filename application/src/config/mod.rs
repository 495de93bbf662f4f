//! Application-level configuration.
//!
//! - [`ExecutionParams`]: how mutating use cases treat the config store

pub mod execution_params;

pub use execution_params::ExecutionParams;
