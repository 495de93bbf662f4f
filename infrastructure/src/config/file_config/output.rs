//! Output configuration from TOML (`[output]` section)

use corosync_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
///
/// # Example
///
/// ```toml
/// [output]
/// format = "json"    # "text" or "json"
/// color = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse the format string, falling back to text with a warning.
    pub fn parse_format(&self) -> (OutputFormat, Vec<ConfigIssue>) {
        let Some(raw) = &self.format else {
            return (OutputFormat::default(), vec![]);
        };
        match raw.parse::<OutputFormat>() {
            Ok(format) => (format, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: raw.clone(),
                        valid_values: vec!["text".to_string(), "json".to_string()],
                    },
                    message: format!(
                        "output.format: unknown value '{}', falling back to 'text'",
                        raw
                    ),
                };
                (OutputFormat::default(), vec![issue])
            }
        }
    }
}
