//! CLI entrypoint for corosync-quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use corosync_application::{
    ChangeLogger, ExecutionParams, InspectConfigUseCase, NoChangeLogger, QuorumCommand,
    QuorumConfigError, UpdateQuorumUseCase,
};
use corosync_domain::{ConfigIssue, FacadeError, Severity};
use corosync_infrastructure::{ConfigLoader, CorosyncConfFile, FileConfig, JsonlChangeLogger};
use corosync_presentation::{
    ArgsError, Cli, Command, DeviceAction, OutputConfig, OutputFormatter, QuorumAction,
    device_add_command, device_update_command, quorum_update_command,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    let Some(command) = cli.command.clone() else {
        eprintln!("{}", Cli::command().render_help());
        return Ok(ExitCode::FAILURE);
    };

    let output = OutputConfig::new(config.output_format(), config.output.color)
        .with_json_flag(cli.json);
    output.apply_color();
    let formatter = output.formatter();

    // === Dependency Injection ===
    let conf_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.corosync.conf_path());
    let store = Arc::new(CorosyncConfFile::new(conf_path));
    info!("Using {}", store.path().display());

    match command {
        Command::Nodes => {
            let view = InspectConfigUseCase::new(store).execute().await?;
            print!("{}", formatter.format_nodes(&view.nodes));
            Ok(ExitCode::SUCCESS)
        }
        Command::Quorum {
            action: QuorumAction::Config,
        } => {
            let view = InspectConfigUseCase::new(store).execute().await?;
            print!("{}", formatter.format_quorum_config(&view));
            Ok(ExitCode::SUCCESS)
        }
        Command::Device {
            action: DeviceAction::Config,
        } => {
            let view = InspectConfigUseCase::new(store).execute().await?;
            print!("{}", formatter.format_device(view.device.as_ref()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Quorum {
            action: QuorumAction::Update { options, force },
        } => {
            let command = quorum_update_command(&options, force);
            apply(&cli, &config, store, command, formatter.as_ref()).await
        }
        Command::Device {
            action:
                DeviceAction::Add {
                    args,
                    force,
                    force_model,
                },
        } => {
            let command = device_add_command(&args, force, force_model);
            apply(&cli, &config, store, command, formatter.as_ref()).await
        }
        Command::Device {
            action: DeviceAction::Update { args, force },
        } => {
            let command = device_update_command(&args, force);
            apply(&cli, &config, store, command, formatter.as_ref()).await
        }
        Command::Device {
            action: DeviceAction::Remove,
        } => {
            let command = Ok(QuorumCommand::RemoveDevice);
            apply(&cli, &config, store, command, formatter.as_ref()).await
        }
    }
}

/// Load the tool configuration and report its issues.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("Error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Configuration has errors");
    }
    Ok(config)
}

/// Run a mutating command and map validation failures to exit code 1.
async fn apply(
    cli: &Cli,
    config: &FileConfig,
    store: Arc<CorosyncConfFile>,
    command: Result<QuorumCommand, ArgsError>,
    formatter: &dyn OutputFormatter,
) -> Result<ExitCode> {
    let command = match command {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let logger: Arc<dyn ChangeLogger> = match config
        .audit_log_path()
        .and_then(JsonlChangeLogger::new)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoChangeLogger),
    };

    let use_case = UpdateQuorumUseCase::new(store)
        .with_logger(logger)
        .with_params(ExecutionParams::default().with_dry_run(cli.dry_run));

    match use_case.execute(command).await {
        Ok(output) => {
            eprint!("{}", formatter.format_findings(&output.warnings));
            print!("{}", formatter.format_update(&output));
            Ok(ExitCode::SUCCESS)
        }
        Err(QuorumConfigError::Facade(FacadeError::Validation(failure))) => {
            eprint!("{}", formatter.format_findings(failure.findings()));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
