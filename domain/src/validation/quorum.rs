//! Validation of `quorum` section options

use super::finding::{AllowedValues, Finding, FindingCode, ForceFlag, OptionType};
use std::collections::BTreeMap;

/// Quorum options that callers may read and set.
pub const QUORUM_OPTIONS: [&str; 4] = [
    "auto_tie_breaker",
    "last_man_standing",
    "last_man_standing_window",
    "wait_for_all",
];

/// Validate proposed quorum options.
///
/// An empty value means "remove the option" and is always accepted for
/// known names. Unknown names are never forceable; bad values are
/// forceable with [`ForceFlag::Options`].
pub fn validate_quorum_options(options: &BTreeMap<String, String>, force: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (name, value) in options {
        if !QUORUM_OPTIONS.contains(&name.as_str()) {
            findings.push(Finding::fatal(FindingCode::UnknownOption {
                option: name.clone(),
                option_type: OptionType::Quorum,
                allowed: QUORUM_OPTIONS.iter().map(|s| s.to_string()).collect(),
            }));
            continue;
        }

        if value.is_empty() {
            continue;
        }

        let allowed = if name == "last_man_standing_window" {
            (!is_non_negative_integer(value)).then_some(AllowedValues::NonNegativeInteger)
        } else {
            (!["0", "1"].contains(&value.as_str())).then(|| AllowedValues::one_of(["0", "1"]))
        };

        if let Some(allowed) = allowed {
            findings.push(Finding::forceable(
                FindingCode::InvalidValue {
                    option: name.clone(),
                    value: value.clone(),
                    allowed,
                },
                ForceFlag::Options,
                force,
            ));
        }
    }

    findings
}

/// True for a non-empty string of ASCII digits.
pub(crate) fn is_non_negative_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::finding::Severity;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn valid_options_produce_no_findings() {
        let findings = validate_quorum_options(
            &options(&[
                ("auto_tie_breaker", "1"),
                ("last_man_standing", "0"),
                ("last_man_standing_window", "10000"),
                ("wait_for_all", "1"),
            ]),
            false,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn empty_value_skips_value_checks() {
        let findings = validate_quorum_options(
            &options(&[("wait_for_all", ""), ("last_man_standing_window", "")]),
            false,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn unknown_option_is_fatal_even_with_force() {
        let findings = validate_quorum_options(&options(&[("two_node", "1")]), true);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].code.category(), "unknown-option");
    }

    #[test]
    fn bad_values_are_forceable() {
        let opts = options(&[("wait_for_all", "yes"), ("last_man_standing_window", "-1")]);

        let findings = validate_quorum_options(&opts, false);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Error));
        // sorted by option name
        assert!(matches!(
            &findings[0].code,
            FindingCode::InvalidValue { option, allowed: AllowedValues::NonNegativeInteger, .. }
                if option == "last_man_standing_window"
        ));

        let forced = validate_quorum_options(&opts, true);
        assert!(forced.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn integer_literal_check() {
        assert!(is_non_negative_integer("0"));
        assert!(is_non_negative_integer("120000"));
        assert!(!is_non_negative_integer(""));
        assert!(!is_non_negative_integer("+1"));
        assert!(!is_non_negative_integer("1.5"));
    }
}
