//! Output formatter trait

use corosync_application::{QuorumConfigView, UpdateQuorumOutput};
use corosync_domain::{Finding, NodeAddressList, QuorumDeviceSettings};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Cluster nodes and their addresses
    fn format_nodes(&self, nodes: &NodeAddressList) -> String;

    /// Quorum options followed by the quorum device, if any
    fn format_quorum_config(&self, view: &QuorumConfigView) -> String;

    /// The quorum device alone
    fn format_device(&self, device: Option<&QuorumDeviceSettings>) -> String;

    /// Result of an applied (or dry-run) change
    fn format_update(&self, output: &UpdateQuorumOutput) -> String;

    /// Validation findings, one per line
    fn format_findings(&self, findings: &[Finding]) -> String;
}
