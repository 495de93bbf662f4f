//! Presentation-level configuration
//!
//! Resolved output settings, after the tool config file and the command
//! line flags have been combined.

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::output::json::JsonFormatter;
use corosync_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// `--json` wins over the configured format
    pub fn with_json_flag(mut self, json: bool) -> Self {
        if json {
            self.format = OutputFormat::Json;
        }
        self
    }

    /// Apply the color setting to the terminal styling.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(ConsoleFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}
