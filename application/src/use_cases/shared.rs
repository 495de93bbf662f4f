//! Shared utilities for use cases.
//!
//! Contains the common error type and the load step used by both the
//! inspecting and the mutating use case.

use crate::ports::config_store::{ConfigStoreError, ConfigStorePort};
use corosync_domain::{ConfigFacade, FacadeError};
use thiserror::Error;
use tracing::debug;

/// Errors returned by quorum configuration use cases
#[derive(Error, Debug)]
pub enum QuorumConfigError {
    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    #[error(transparent)]
    Facade(#[from] FacadeError),
}

impl QuorumConfigError {
    /// True if the error is a rejected change (as opposed to I/O or parsing)
    pub fn is_validation(&self) -> bool {
        matches!(self, QuorumConfigError::Facade(FacadeError::Validation(_)))
    }
}

/// Load the configuration text from the store and wrap it in a facade.
pub(crate) async fn load_facade(store: &dyn ConfigStorePort) -> Result<ConfigFacade, QuorumConfigError> {
    let text = store.load().await?;
    debug!(location = %store.location(), bytes = text.len(), "Loaded corosync config");
    Ok(ConfigFacade::from_text(&text)?)
}
