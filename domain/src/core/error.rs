//! Domain error types

use crate::section::ParseError;
use crate::validation::{Finding, Severity};
use thiserror::Error;

/// Errors returned by [`ConfigFacade`](crate::facade::ConfigFacade)
#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Unable to parse corosync config: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl FacadeError {
    /// Findings of a validation failure, empty for parse errors
    pub fn findings(&self) -> &[Finding] {
        match self {
            FacadeError::Validation(failure) => failure.findings(),
            FacadeError::Parse(_) => &[],
        }
    }
}

/// A mutation rejected by validation.
///
/// Holds every finding of the call in order, including warnings, and is
/// guaranteed to contain at least one error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", join_errors(.findings))]
pub struct ValidationFailure {
    findings: Vec<Finding>,
}

impl ValidationFailure {
    pub(crate) fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Single blocking finding, used for precondition violations
    pub(crate) fn single(finding: Finding) -> Self {
        Self::new(vec![finding])
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

fn join_errors(findings: &[Finding]) -> String {
    findings
        .iter()
        .filter(|finding| finding.severity == Severity::Error)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
