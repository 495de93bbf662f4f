//! Update quorum configuration use case
//!
//! Applies one [`QuorumCommand`] to the stored corosync configuration:
//!
//! 1. **Load** the text through the [`ConfigStorePort`]
//! 2. **Apply** the command through the facade (validation, merge,
//!    derived options, pruning)
//! 3. **Save** the serialized result, unless running dry
//! 4. **Record** the change through the [`ChangeLogger`] port
//!
//! A rejected command never reaches step 3: the store is left untouched.

use super::shared::{QuorumConfigError, load_facade};
use crate::config::ExecutionParams;
use crate::ports::change_logger::{ChangeEvent, ChangeLogger, NoChangeLogger};
use crate::ports::config_store::ConfigStorePort;
use corosync_domain::{ConfigFacade, FacadeError, Finding};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// A change to the quorum configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum QuorumCommand {
    SetQuorumOptions {
        options: BTreeMap<String, String>,
        force: bool,
    },
    AddDevice {
        model: String,
        model_options: BTreeMap<String, String>,
        generic_options: BTreeMap<String, String>,
        force_model: bool,
        force_options: bool,
    },
    UpdateDevice {
        model_options: BTreeMap<String, String>,
        generic_options: BTreeMap<String, String>,
        force_options: bool,
    },
    RemoveDevice,
}

impl QuorumCommand {
    /// Identifier used for audit records
    pub fn event_type(&self) -> &'static str {
        match self {
            QuorumCommand::SetQuorumOptions { .. } => "quorum_options_set",
            QuorumCommand::AddDevice { .. } => "qdevice_added",
            QuorumCommand::UpdateDevice { .. } => "qdevice_updated",
            QuorumCommand::RemoveDevice => "qdevice_removed",
        }
    }

    fn apply(&self, facade: &mut ConfigFacade) -> Result<Vec<Finding>, FacadeError> {
        match self {
            QuorumCommand::SetQuorumOptions { options, force } => {
                facade.set_quorum_options(options, *force)
            }
            QuorumCommand::AddDevice {
                model,
                model_options,
                generic_options,
                force_model,
                force_options,
            } => facade.add_quorum_device(
                model,
                model_options,
                generic_options,
                *force_model,
                *force_options,
            ),
            QuorumCommand::UpdateDevice {
                model_options,
                generic_options,
                force_options,
            } => facade.update_quorum_device(model_options, generic_options, *force_options),
            QuorumCommand::RemoveDevice => facade.remove_quorum_device().map(|()| Vec::new()),
        }
    }
}

/// Result of an applied command
#[derive(Debug, Clone, Serialize)]
pub struct UpdateQuorumOutput {
    /// Findings downgraded by force flags
    pub warnings: Vec<Finding>,
    /// The new configuration text
    pub config_text: String,
    /// Whether the text was written back to the store
    pub written: bool,
}

pub struct UpdateQuorumUseCase<S: ConfigStorePort + 'static> {
    store: Arc<S>,
    logger: Arc<dyn ChangeLogger>,
    params: ExecutionParams,
}

impl<S: ConfigStorePort + 'static> UpdateQuorumUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            logger: Arc::new(NoChangeLogger),
            params: ExecutionParams::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ChangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(
        &self,
        command: QuorumCommand,
    ) -> Result<UpdateQuorumOutput, QuorumConfigError> {
        let location = self.store.location();
        let mut facade = load_facade(self.store.as_ref()).await?;

        info!(command = command.event_type(), %location, "Applying quorum configuration change");
        let warnings = command.apply(&mut facade)?;
        for finding in &warnings {
            warn!("{}", finding);
        }

        let config_text = facade.serialize();
        let written = if self.params.dry_run {
            info!("Dry run, {} left unchanged", location);
            false
        } else {
            self.store.save(&config_text).await?;
            info!("Wrote {}", location);
            true
        };

        if written {
            self.logger.log(ChangeEvent::new(
                command.event_type(),
                serde_json::json!({
                    "location": location,
                    "change": command,
                    "warnings": warnings,
                }),
            ));
        }

        Ok(UpdateQuorumOutput {
            warnings,
            config_text,
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::test_support::{MemoryStore, RecordingLogger, TWO_NODES};
    use corosync_domain::Severity;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn add_net(host: &str) -> QuorumCommand {
        QuorumCommand::AddDevice {
            model: "net".to_string(),
            model_options: options(&[("host", host)]),
            generic_options: options(&[]),
            force_model: false,
            force_options: false,
        }
    }

    #[tokio::test]
    async fn test_set_options_writes_and_logs() {
        let store = Arc::new(MemoryStore::new(TWO_NODES));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = UpdateQuorumUseCase::new(store.clone()).with_logger(logger.clone());

        let output = use_case
            .execute(QuorumCommand::SetQuorumOptions {
                options: options(&[("wait_for_all", "1")]),
                force: false,
            })
            .await
            .unwrap();

        assert!(output.written);
        assert!(output.warnings.is_empty());
        assert_eq!(store.saves(), 1);
        assert_eq!(store.text(), output.config_text);
        assert!(store.text().contains("wait_for_all: 1"));
        assert!(store.text().contains("two_node: 1"));

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "quorum_options_set");
        assert_eq!(events[0].1["change"]["command"], "set_quorum_options");
        assert_eq!(events[0].1["location"], "memory");
    }

    #[tokio::test]
    async fn test_dry_run_leaves_store_untouched() {
        let store = Arc::new(MemoryStore::new(TWO_NODES));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = UpdateQuorumUseCase::new(store.clone())
            .with_logger(logger.clone())
            .with_params(ExecutionParams::default().with_dry_run(true));

        let output = use_case.execute(add_net("qnetd")).await.unwrap();

        assert!(!output.written);
        assert!(output.config_text.contains("host: qnetd"));
        assert_eq!(store.saves(), 0);
        assert_eq!(store.text(), TWO_NODES);
        assert!(logger.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_command_writes_nothing() {
        let store = Arc::new(MemoryStore::new(TWO_NODES));
        let use_case = UpdateQuorumUseCase::new(store.clone());

        let error = use_case
            .execute(QuorumCommand::RemoveDevice)
            .await
            .unwrap_err();

        assert!(error.is_validation());
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_unwritable_value_never_reaches_the_store() {
        let store = Arc::new(MemoryStore::new(TWO_NODES));
        let use_case = UpdateQuorumUseCase::new(store.clone());

        let error = use_case
            .execute(QuorumCommand::AddDevice {
                model: "net".to_string(),
                model_options: options(&[("host", "q\n}\ntotem {\nx: y")]),
                generic_options: options(&[]),
                force_model: true,
                force_options: true,
            })
            .await
            .unwrap_err();

        assert!(error.is_validation());
        assert_eq!(store.saves(), 0);
        assert_eq!(store.text(), TWO_NODES);
    }

    #[tokio::test]
    async fn test_forced_findings_are_returned_as_warnings() {
        let store = Arc::new(MemoryStore::new(TWO_NODES));
        let use_case = UpdateQuorumUseCase::new(store.clone());

        let output = use_case
            .execute(QuorumCommand::AddDevice {
                model: "net".to_string(),
                model_options: options(&[("host", "q"), ("port", "70000")]),
                generic_options: options(&[]),
                force_model: false,
                force_options: true,
            })
            .await
            .unwrap();

        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].severity, Severity::Warning);
        assert!(store.text().contains("port: 70000"));
    }

    #[tokio::test]
    async fn test_full_device_lifecycle() {
        let store = Arc::new(MemoryStore::new(TWO_NODES));
        let use_case = UpdateQuorumUseCase::new(store.clone());

        use_case.execute(add_net("a")).await.unwrap();
        assert!(!store.text().contains("two_node"));

        let error = use_case.execute(add_net("b")).await.unwrap_err();
        assert!(error.is_validation());

        use_case
            .execute(QuorumCommand::UpdateDevice {
                model_options: options(&[("host", "b")]),
                generic_options: options(&[("timeout", "5000")]),
                force_options: false,
            })
            .await
            .unwrap();
        assert!(store.text().contains("host: b"));
        assert!(store.text().contains("timeout: 5000"));

        use_case.execute(QuorumCommand::RemoveDevice).await.unwrap();
        assert!(!store.text().contains("device"));
        assert!(store.text().contains("two_node: 1"));
        assert_eq!(store.saves(), 3);
    }
}
