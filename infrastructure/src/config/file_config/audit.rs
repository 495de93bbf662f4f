//! Audit log configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};

/// Raw audit configuration from TOML
///
/// # Example
///
/// ```toml
/// [audit]
/// enabled = true
/// log_path = "/var/log/corosync-quorum/changes.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// Record applied changes as JSONL
    pub enabled: bool,
    /// Where the JSONL records go
    pub log_path: Option<String>,
}
