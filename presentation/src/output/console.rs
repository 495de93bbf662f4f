//! Console output formatter for quorum configuration

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use corosync_application::{QuorumConfigView, UpdateQuorumOutput};
use corosync_domain::{Finding, NodeAddressList, QuorumDeviceSettings, Severity};
use std::collections::BTreeMap;

/// Formats results as indented text for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn options_block(output: &mut String, options: &BTreeMap<String, String>, prefix: &str) {
        for (key, value) in options {
            output.push_str(&format!("{}{}: {}\n", prefix, key, value));
        }
    }

    fn device_block(device: &QuorumDeviceSettings) -> String {
        let mut output = format!("{}\n", "Device:".cyan().bold());
        Self::options_block(&mut output, &device.generic_options, "  ");
        if let Some(model) = &device.model {
            output.push_str(&format!("  {} {}\n", "Model:".bold(), model));
            Self::options_block(&mut output, &device.model_options, "    ");
        }
        output
    }

    fn finding_line(finding: &Finding) -> String {
        match finding.severity {
            Severity::Error => format!("{} {}", "Error:".red().bold(), finding),
            Severity::Warning => format!("{} {}", "Warning:".yellow().bold(), finding),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_nodes(&self, nodes: &NodeAddressList) -> String {
        if nodes.is_empty() {
            return format!("{}\n", "No nodes defined".dimmed());
        }
        let mut output = String::new();
        for node in nodes {
            output.push_str(&format!("{}\n", node.label().bold()));
            let fields = [
                ("nodeid", &node.id),
                ("ring0_addr", &node.ring0),
                ("ring1_addr", &node.ring1),
            ];
            for (key, value) in fields {
                if let Some(value) = value {
                    output.push_str(&format!("  {}: {}\n", key, value));
                }
            }
        }
        output
    }

    fn format_quorum_config(&self, view: &QuorumConfigView) -> String {
        let mut output = String::new();
        if !view.quorum_options.is_empty() {
            output.push_str(&format!("{}\n", "Options:".cyan().bold()));
            Self::options_block(&mut output, &view.quorum_options, "  ");
        }
        if let Some(device) = &view.device {
            output.push_str(&Self::device_block(device));
        }
        output
    }

    fn format_device(&self, device: Option<&QuorumDeviceSettings>) -> String {
        match device {
            Some(device) => Self::device_block(device),
            None => format!("{}\n", "No quorum device is defined".dimmed()),
        }
    }

    fn format_update(&self, output: &UpdateQuorumOutput) -> String {
        if output.written {
            String::new()
        } else {
            output.config_text.clone()
        }
    }

    fn format_findings(&self, findings: &[Finding]) -> String {
        findings
            .iter()
            .map(|finding| format!("{}\n", Self::finding_line(finding)))
            .collect()
    }
}
