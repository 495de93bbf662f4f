//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod corosync;
mod output;

pub use audit::FileAuditConfig;
pub use corosync::{DEFAULT_CONF_PATH, FileCorosyncConfig};
pub use output::FileOutputConfig;

use corosync_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Cluster configuration file settings
    pub corosync: FileCorosyncConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Change audit log settings
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The corosync.conf path is not empty
    /// 2. The output format is known
    /// 3. An enabled audit log has somewhere to go
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Path validation
        if self.corosync.conf_path.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyPath {
                    field: "corosync.conf_path".to_string(),
                },
                message: "corosync.conf_path cannot be empty".to_string(),
            });
        }

        // 2. Enum parse validation
        issues.extend(self.output.parse_format().1);

        // 3. Audit dependency
        if self.audit.enabled
            && self
                .audit
                .log_path
                .as_deref()
                .is_none_or(|path| path.trim().is_empty())
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingDependency {
                    field: "audit.enabled".to_string(),
                    requires: "audit.log_path".to_string(),
                },
                message: "audit.enabled is set but audit.log_path is missing, audit log disabled"
                    .to_string(),
            });
        }

        issues
    }

    /// Effective output format after validation fallbacks
    pub fn output_format(&self) -> OutputFormat {
        self.output.parse_format().0
    }

    /// Audit log path, if auditing is enabled and configured
    pub fn audit_log_path(&self) -> Option<&str> {
        if !self.audit.enabled {
            return None;
        }
        self.audit
            .log_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
    }
}
