//! Option validation for quorum and quorum device configuration
//!
//! All validators are pure: they inspect the proposed options (and, for
//! `tie_breaker`, the current node list) and return findings. They never
//! fail and never touch the configuration tree. [`gate`] turns a finding
//! list into the all-or-nothing decision used by every mutation.

pub mod finding;
pub mod qdevice;
pub mod quorum;
pub mod text;

pub use finding::{
    AllowedValues, Finding, FindingCode, ForceFlag, Forceability, OptionType, Severity,
    TextKind, has_errors,
};
pub use qdevice::{validate_generic_options, validate_model, validate_model_options};
pub use quorum::{QUORUM_OPTIONS, validate_quorum_options};
pub use text::{validate_writable_name, validate_writable_options};

use crate::core::error::ValidationFailure;

/// Decide whether an operation may proceed.
///
/// Returns the findings (all warnings) when nothing blocks, otherwise a
/// [`ValidationFailure`] carrying every finding, errors and warnings alike.
pub fn gate(findings: Vec<Finding>) -> Result<Vec<Finding>, ValidationFailure> {
    if has_errors(&findings) {
        Err(ValidationFailure::new(findings))
    } else {
        Ok(findings)
    }
}
