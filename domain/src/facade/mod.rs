//! Quorum and quorum device configuration facade
//!
//! [`ConfigFacade`] owns a parsed corosync configuration tree and provides
//! cluster-aware access to it:
//!
//! - **Queries**: nodes, quorum options, quorum device settings
//! - **Mutations**: set quorum options, add/update/remove a quorum device
//!
//! Every mutation runs the same pipeline:
//!
//! ```text
//! validate ──(any error)──▶ Err(ValidationFailure), tree untouched
//!    │
//!    ▼
//! apply (merge rule) ─▶ recompute derived options ─▶ prune empty sections
//! ```
//!
//! The facade performs no I/O and no locking; it is meant to live for one
//! load, mutate, serialize cycle.
//!
//! # Examples
//!
//! ```
//! use corosync_domain::facade::ConfigFacade;
//! use std::collections::BTreeMap;
//!
//! let mut facade = ConfigFacade::from_text("quorum {\n    provider: corosync_votequorum\n}\n").unwrap();
//! let options = BTreeMap::from([("wait_for_all".to_string(), "1".to_string())]);
//! let warnings = facade.set_quorum_options(&options, false).unwrap();
//! assert!(warnings.is_empty());
//! assert_eq!(facade.get_quorum_options()["wait_for_all"], "1");
//! ```

mod hygiene;
mod invariants;
mod mutation;
mod query;

pub use query::QuorumDeviceSettings;

use crate::core::error::FacadeError;
use crate::section::{self, Section};

/// High level access to a corosync configuration document
#[derive(Debug, Clone)]
pub struct ConfigFacade {
    config: Section,
}

impl ConfigFacade {
    /// Wrap an already parsed configuration tree.
    pub fn new(config: Section) -> Self {
        Self { config }
    }

    /// Parse configuration text and wrap the resulting tree.
    pub fn from_text(text: &str) -> Result<Self, FacadeError> {
        Ok(Self::new(section::parse(text)?))
    }

    /// The underlying configuration tree
    pub fn config(&self) -> &Section {
        &self.config
    }

    pub fn into_config(self) -> Section {
        self.config
    }

    /// Render the configuration back to text.
    pub fn serialize(&self) -> String {
        section::export(&self.config)
    }

    fn finish_mutation(&mut self) {
        self.update_derived_options();
        hygiene::remove_empty_sections(&mut self.config);
    }
}
