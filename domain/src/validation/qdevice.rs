//! Validation of quorum device (qdevice) model and options

use super::finding::{AllowedValues, Finding, FindingCode, ForceFlag, OptionType};
use super::quorum::is_non_negative_integer;
use crate::node::NodeAddressList;
use std::collections::BTreeMap;

/// Quorum device models this facade knows how to configure.
pub const SUPPORTED_MODELS: [&str; 1] = ["net"];

pub const NET_REQUIRED_OPTIONS: [&str; 1] = ["host"];
pub const NET_OPTIONAL_OPTIONS: [&str; 5] = [
    "algorithm",
    "connect_timeout",
    "force_ip_version",
    "port",
    "tie_breaker",
];
pub const NET_ALGORITHMS: [&str; 3] = ["2nodelms", "ffsplit", "lms"];

/// Options of the `device` section itself (as opposed to the model section).
pub const GENERIC_OPTIONS: [&str; 2] = ["sync_timeout", "timeout"];

const CONNECT_TIMEOUT_RANGE: (u64, u64) = (1000, 2 * 60 * 1000);
const PORT_RANGE: (u64, u64) = (1, 65535);

/// Validate the device model name; forceable with [`ForceFlag::Model`].
pub fn validate_model(model: &str, force_model: bool) -> Vec<Finding> {
    if SUPPORTED_MODELS.contains(&model) {
        return Vec::new();
    }
    vec![Finding::forceable(
        FindingCode::BadModel {
            model: model.to_string(),
            allowed: SUPPORTED_MODELS.iter().map(|s| s.to_string()).collect(),
        },
        ForceFlag::Model,
        force_model,
    )]
}

/// Validate model specific options.
///
/// Only the `net` model has known options; anything else is accepted as is
/// (the model itself is reported by [`validate_model`]). `need_required`
/// enables the presence check for required options, which is skipped on
/// update because previously stored values persist.
pub fn validate_model_options(
    model: &str,
    options: &BTreeMap<String, String>,
    need_required: bool,
    nodes: &NodeAddressList,
    force: bool,
) -> Vec<Finding> {
    match model {
        "net" => validate_net_options(options, need_required, nodes, force),
        _ => Vec::new(),
    }
}

fn validate_net_options(
    options: &BTreeMap<String, String>,
    need_required: bool,
    nodes: &NodeAddressList,
    force: bool,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if need_required {
        for missing in NET_REQUIRED_OPTIONS
            .iter()
            .filter(|name| !options.contains_key(**name))
        {
            findings.push(missing_required(missing));
        }
    }

    for (name, value) in options {
        let name = name.as_str();
        let is_required = NET_REQUIRED_OPTIONS.contains(&name);

        if !is_required && !NET_OPTIONAL_OPTIONS.contains(&name) {
            let mut allowed: Vec<String> = NET_REQUIRED_OPTIONS
                .iter()
                .chain(NET_OPTIONAL_OPTIONS.iter())
                .map(|s| s.to_string())
                .collect();
            allowed.sort();
            findings.push(Finding::forceable(
                FindingCode::UnknownOption {
                    option: name.to_string(),
                    option_type: OptionType::QuorumDeviceModel,
                    allowed,
                },
                ForceFlag::Options,
                force,
            ));
            continue;
        }

        if value.is_empty() {
            // required options cannot be removed
            if is_required {
                findings.push(missing_required(name));
            }
            continue;
        }

        let allowed = match name {
            "algorithm" => {
                (!NET_ALGORITHMS.contains(&value.as_str())).then(|| AllowedValues::one_of(NET_ALGORITHMS))
            }
            "connect_timeout" => out_of_range(value, CONNECT_TIMEOUT_RANGE),
            "force_ip_version" => {
                (!["0", "4", "6"].contains(&value.as_str())).then(|| AllowedValues::one_of(["0", "4", "6"]))
            }
            "port" => out_of_range(value, PORT_RANGE),
            "tie_breaker" => {
                let valid = ["lowest", "highest"].contains(&value.as_str())
                    || nodes.ids().any(|id| id == value);
                (!valid).then(|| AllowedValues::one_of(["lowest", "highest", "valid node id"]))
            }
            _ => None,
        };

        if let Some(allowed) = allowed {
            findings.push(invalid_value(name, value, allowed, force));
        }
    }

    findings
}

/// Validate options of the `device` section.
///
/// `model` is never a generic option (it has its own argument), so passing
/// it here is a hard error even under force.
pub fn validate_generic_options(options: &BTreeMap<String, String>, force: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (name, value) in options {
        if !GENERIC_OPTIONS.contains(&name.as_str()) {
            let code = FindingCode::UnknownOption {
                option: name.clone(),
                option_type: OptionType::QuorumDevice,
                allowed: GENERIC_OPTIONS.iter().map(|s| s.to_string()).collect(),
            };
            findings.push(if name == "model" {
                Finding::fatal(code)
            } else {
                Finding::forceable(code, ForceFlag::Options, force)
            });
            continue;
        }

        if !value.is_empty() && !is_non_negative_integer(value) {
            findings.push(invalid_value(
                name,
                value,
                AllowedValues::NonNegativeInteger,
                force,
            ));
        }
    }

    findings
}

fn missing_required(option: &str) -> Finding {
    Finding::fatal(FindingCode::MissingRequiredOption {
        option: option.to_string(),
    })
}

fn invalid_value(option: &str, value: &str, allowed: AllowedValues, force: bool) -> Finding {
    Finding::forceable(
        FindingCode::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
            allowed,
        },
        ForceFlag::Options,
        force,
    )
}

fn out_of_range(value: &str, (min, max): (u64, u64)) -> Option<AllowedValues> {
    let in_range = is_non_negative_integer(value)
        && value
            .parse::<u64>()
            .is_ok_and(|number| (min..=max).contains(&number));
    (!in_range).then_some(AllowedValues::Range { min, max })
}
