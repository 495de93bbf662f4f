//! Diagnostic findings produced by option validation.
//!
//! Every finding carries a [`FindingCode`] (what is wrong), a [`Severity`]
//! and a [`Forceability`] tag. The tag decides how a caller's force flag
//! affects the severity:
//!
//! - [`Forceability::Forceable`] findings are errors normally and are
//!   downgraded to warnings when the matching force flag is set
//! - [`Forceability::AlwaysFatal`] findings are errors no matter what
//!
//! Constructing a finding always goes through [`Finding::fatal`] or
//! [`Finding::forceable`], so a new rule cannot forget to decide.
//!
//! # Examples
//!
//! ```
//! use corosync_domain::validation::{Finding, FindingCode, ForceFlag, Severity};
//!
//! let code = FindingCode::BadModel {
//!     model: "bogus".to_string(),
//!     allowed: vec!["net".to_string()],
//! };
//! let blocking = Finding::forceable(code.clone(), ForceFlag::Model, false);
//! assert_eq!(blocking.severity, Severity::Error);
//! assert_eq!(blocking.force_hint(), Some("--force-model"));
//!
//! let forced = Finding::forceable(code, ForceFlag::Model, true);
//! assert_eq!(forced.severity, Severity::Warning);
//! ```

use serde::Serialize;
use std::fmt;

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the mutation.
    Error,
    /// Reported to the operator; the mutation proceeds.
    Warning,
}

/// The caller intent that overrides a forceable finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceFlag {
    /// Accept invalid or unknown options.
    Options,
    /// Accept an unsupported quorum device model.
    Model,
}

impl ForceFlag {
    /// Command-line spelling of the flag.
    pub fn flag(&self) -> &'static str {
        match self {
            ForceFlag::Options => "--force",
            ForceFlag::Model => "--force-model",
        }
    }
}

/// Whether a finding can be downgraded by explicit operator intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "flag")]
pub enum Forceability {
    Forceable(ForceFlag),
    AlwaysFatal,
}

/// Which group of options a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Quorum,
    QuorumDevice,
    QuorumDeviceModel,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Quorum => "quorum",
            OptionType::QuorumDevice => "quorum device",
            OptionType::QuorumDeviceModel => "quorum device model",
        };
        f.write_str(name)
    }
}

/// Description of the values an option accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AllowedValues {
    OneOf { values: Vec<String> },
    Range { min: u64, max: u64 },
    NonNegativeInteger,
}

impl AllowedValues {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AllowedValues::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for AllowedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedValues::OneOf { values } => write!(f, "{}", join_quoted(values)),
            AllowedValues::Range { min, max } => write!(f, "{min}-{max}"),
            AllowedValues::NonNegativeInteger => f.write_str("a non-negative integer"),
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "category")]
pub enum FindingCode {
    UnknownOption {
        option: String,
        option_type: OptionType,
        allowed: Vec<String>,
    },
    InvalidValue {
        option: String,
        value: String,
        allowed: AllowedValues,
    },
    MissingRequiredOption {
        option: String,
    },
    DeviceAlreadyDefined,
    DeviceNotDefined,
    BadModel {
        model: String,
        allowed: Vec<String>,
    },
    /// Text the configuration format cannot hold without changing meaning.
    UnwritableText {
        text: String,
        kind: TextKind,
    },
}

/// Where an unwritable piece of text would have been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// An attribute or section name
    Name,
    /// An attribute value
    Value,
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextKind::Name => "name",
            TextKind::Value => "value",
        })
    }
}

impl FindingCode {
    /// Stable category identifier.
    pub fn category(&self) -> &'static str {
        match self {
            FindingCode::UnknownOption { .. } => "unknown-option",
            FindingCode::InvalidValue { .. } => "invalid-value",
            FindingCode::MissingRequiredOption { .. } => "missing-required-option",
            FindingCode::DeviceAlreadyDefined => "device-already-defined",
            FindingCode::DeviceNotDefined => "device-not-defined",
            FindingCode::BadModel { .. } => "bad-model",
            FindingCode::UnwritableText { .. } => "unwritable-text",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCode::UnknownOption {
                option,
                option_type,
                allowed,
            } => write!(
                f,
                "invalid {option_type} option '{option}', allowed options are: {}",
                join_quoted(allowed)
            ),
            FindingCode::InvalidValue {
                option,
                value,
                allowed,
            } => write!(
                f,
                "'{value}' is not a valid {option} value, use {allowed}"
            ),
            FindingCode::MissingRequiredOption { option } => {
                write!(f, "required option '{option}' is missing")
            }
            FindingCode::DeviceAlreadyDefined => f.write_str("quorum device is already defined"),
            FindingCode::DeviceNotDefined => f.write_str("no quorum device is defined in this cluster"),
            FindingCode::BadModel { model, allowed } => write!(
                f,
                "'{model}' is not a valid model value, use {}",
                join_quoted(allowed)
            ),
            FindingCode::UnwritableText { text, kind } => write!(
                f,
                "{:?} cannot be used as a corosync.conf {kind}",
                text
            ),
        }
    }
}

/// A single validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub forceability: Forceability,
    #[serde(flatten)]
    pub code: FindingCode,
}

impl Finding {
    /// A finding that blocks the operation regardless of force flags.
    pub fn fatal(code: FindingCode) -> Self {
        Self {
            severity: Severity::Error,
            forceability: Forceability::AlwaysFatal,
            code,
        }
    }

    /// A finding that `flag` downgrades to a warning when `forced` is set.
    pub fn forceable(code: FindingCode, flag: ForceFlag, forced: bool) -> Self {
        Self {
            severity: if forced {
                Severity::Warning
            } else {
                Severity::Error
            },
            forceability: Forceability::Forceable(flag),
            code,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The flag that would override this finding, if it currently blocks.
    pub fn force_hint(&self) -> Option<&'static str> {
        match (self.severity, self.forceability) {
            (Severity::Error, Forceability::Forceable(flag)) => Some(flag.flag()),
            _ => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(flag) = self.force_hint() {
            write!(f, ", use {flag} to override")?;
        }
        Ok(())
    }
}

/// True if any finding blocks the operation.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(Finding::is_error)
}

fn join_quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
