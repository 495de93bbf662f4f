//! Checks that names and values survive a write and re-read of the text
//! format.
//!
//! The parser trims lines, splits attributes at the first `:`, treats a
//! trailing `{` as a section header and `}` or `#` at line start as
//! structure or comment. Anything that would be read back differently is
//! rejected with an [`FindingCode::UnwritableText`] finding, which no force
//! flag overrides.

use super::finding::{Finding, FindingCode, TextKind};
use std::collections::BTreeMap;

fn has_structural_chars(text: &str) -> bool {
    text.contains(['\n', '\r', '{', '}'])
}

fn is_writable_name(name: &str) -> bool {
    !name.is_empty()
        && name.trim() == name
        && !name.starts_with('#')
        && !name.contains(':')
        && !has_structural_chars(name)
}

fn is_writable_value(value: &str) -> bool {
    value.trim() == value && !has_structural_chars(value)
}

fn unwritable(text: &str, kind: TextKind) -> Finding {
    Finding::fatal(FindingCode::UnwritableText {
        text: text.to_string(),
        kind,
    })
}

/// Validate a section name such as a quorum device model.
pub fn validate_writable_name(name: &str) -> Vec<Finding> {
    if is_writable_name(name) {
        Vec::new()
    } else {
        vec![unwritable(name, TextKind::Name)]
    }
}

/// Validate option names and values; empty values mean removal and pass.
pub fn validate_writable_options(options: &BTreeMap<String, String>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (name, value) in options {
        if !is_writable_name(name) {
            findings.push(unwritable(name, TextKind::Name));
        }
        if !is_writable_value(value) {
            findings.push(unwritable(value, TextKind::Value));
        }
    }
    findings
}
