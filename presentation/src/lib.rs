//! Presentation layer for corosync-quorum
//!
//! This crate contains CLI definitions, positional argument parsing and
//! output formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::args::{
    ArgsError, device_add_command, device_update_command, parse_options, quorum_update_command,
};
pub use cli::commands::{Cli, Command, DeviceAction, QuorumAction};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
