//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for corosync-quorum
#[derive(Parser, Debug)]
#[command(name = "corosync-quorum")]
#[command(author, version, about = "Inspect and edit corosync quorum and quorum device settings")]
#[command(long_about = r#"
corosync-quorum reads corosync.conf, shows the quorum configuration and
applies validated changes to the quorum options and the quorum device.

Derived options are kept consistent after every change: two_node is set
only for two-node clusters without a quorum device, and the net model
algorithm follows the cluster size.

Configuration files are loaded from (in priority order):
1. COROSYNC_QUORUM_* environment variables
2. --config <path>                          Explicit config file
3. ./corosync-quorum.toml                   Project-level config
4. ~/.config/corosync-quorum/config.toml    Global config

Example:
  corosync-quorum quorum config
  corosync-quorum quorum update wait_for_all=1 last_man_standing=1
  corosync-quorum device add timeout=5000 model net host=qnetd algorithm=ffsplit
  corosync-quorum device update model tie_breaker=lowest
  corosync-quorum --dry-run device remove
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// corosync.conf to operate on (overrides corosync.conf_path)
    #[arg(short, long, global = true, value_name = "CONF")]
    pub file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Validate and print the resulting configuration without writing it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List cluster nodes and their addresses
    Nodes,

    /// Show or change quorum options
    Quorum {
        #[command(subcommand)]
        action: QuorumAction,
    },

    /// Show, add, change or remove the quorum device
    Device {
        #[command(subcommand)]
        action: DeviceAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QuorumAction {
    /// Show quorum options and the quorum device
    Config,

    /// Set quorum options; an empty value removes the option
    Update {
        /// Options to set
        #[arg(required = true, value_name = "OPTION=VALUE")]
        options: Vec<String>,

        /// Accept invalid option values
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DeviceAction {
    /// Show the quorum device
    Config,

    /// Add a quorum device
    ///
    /// Arguments: [OPTION=VALUE...] model <MODEL> [MODEL_OPTION=VALUE...]
    Add {
        #[arg(required = true, value_name = "ARGS")]
        args: Vec<String>,

        /// Accept invalid option values
        #[arg(long)]
        force: bool,

        /// Accept an unsupported model
        #[arg(long)]
        force_model: bool,
    },

    /// Change options of the quorum device
    ///
    /// Arguments: [OPTION=VALUE...] [model MODEL_OPTION=VALUE...]
    Update {
        #[arg(required = true, value_name = "ARGS")]
        args: Vec<String>,

        /// Accept invalid option values
        #[arg(long)]
        force: bool,
    },

    /// Remove the quorum device
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quorum_update() {
        let cli = Cli::try_parse_from([
            "corosync-quorum",
            "--dry-run",
            "quorum",
            "update",
            "wait_for_all=1",
            "--force",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(
            cli.command,
            Some(Command::Quorum {
                action: QuorumAction::Update {
                    options: vec!["wait_for_all=1".to_string()],
                    force: true,
                }
            })
        );
    }

    #[test]
    fn test_parse_device_add_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "corosync-quorum",
            "device",
            "add",
            "model",
            "net",
            "host=qnetd",
            "--force-model",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Command::Device {
                action:
                    DeviceAction::Add {
                        args,
                        force,
                        force_model,
                    },
            }) => {
                assert_eq!(args, vec!["model", "net", "host=qnetd"]);
                assert!(!force);
                assert!(force_model);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quorum_update_requires_options() {
        assert!(Cli::try_parse_from(["corosync-quorum", "quorum", "update"]).is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["corosync-quorum", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
