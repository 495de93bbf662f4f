//! Core domain concepts shared across all subdomains.
//!
//! - [`error::FacadeError`]: errors surfaced by the configuration facade
//! - [`error::ValidationFailure`]: a blocked mutation and its findings

pub mod error;
