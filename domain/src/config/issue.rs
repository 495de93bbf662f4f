//! Issues detected in the tool configuration file.

use crate::validation::Severity;

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required path setting is empty.
    EmptyPath { field: String },
    /// A string setting holds a value outside its enumeration.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A feature is enabled without the setting it depends on.
    MissingDependency { field: String, requires: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|issue| issue.severity == Severity::Error)
    }
}
