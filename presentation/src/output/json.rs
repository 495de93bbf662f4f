//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use corosync_application::{QuorumConfigView, UpdateQuorumOutput};
use corosync_domain::{Finding, NodeAddressList, QuorumDeviceSettings};
use serde::Serialize;

/// Formats results as pretty-printed JSON documents
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> String {
        let mut text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
        text.push('\n');
        text
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_nodes(&self, nodes: &NodeAddressList) -> String {
        Self::render(nodes)
    }

    fn format_quorum_config(&self, view: &QuorumConfigView) -> String {
        Self::render(view)
    }

    fn format_device(&self, device: Option<&QuorumDeviceSettings>) -> String {
        Self::render(&device)
    }

    fn format_update(&self, output: &UpdateQuorumOutput) -> String {
        Self::render(output)
    }

    fn format_findings(&self, findings: &[Finding]) -> String {
        Self::render(findings)
    }
}
