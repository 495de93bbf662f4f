//! Inspect configuration use case
//!
//! Loads the corosync configuration and returns a read-only view of the
//! cluster nodes, the quorum options and the quorum device (if any).

use super::shared::{QuorumConfigError, load_facade};
use crate::ports::config_store::ConfigStorePort;
use corosync_domain::{NodeAddressList, QuorumDeviceSettings};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Snapshot of the quorum relevant parts of a configuration
#[derive(Debug, Clone, Serialize)]
pub struct QuorumConfigView {
    pub nodes: NodeAddressList,
    pub quorum_options: BTreeMap<String, String>,
    /// Present only when a device with a model is configured
    pub device: Option<QuorumDeviceSettings>,
}

pub struct InspectConfigUseCase<S: ConfigStorePort + 'static> {
    store: Arc<S>,
}

impl<S: ConfigStorePort + 'static> InspectConfigUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<QuorumConfigView, QuorumConfigError> {
        let facade = load_facade(self.store.as_ref()).await?;
        let device = facade
            .has_quorum_device()
            .then(|| facade.get_quorum_device_settings());
        Ok(QuorumConfigView {
            nodes: facade.get_nodes(),
            quorum_options: facade.get_quorum_options(),
            device,
        })
    }
}
