//! Execution parameters: use case behavior control.
//!
//! [`ExecutionParams`] groups the static parameters that control how
//! [`UpdateQuorumUseCase`](crate::use_cases::update_quorum::UpdateQuorumUseCase)
//! treats the config store. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};

/// Mutation control parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Validate and render the new configuration without writing it back.
    pub dry_run: bool,
}

impl ExecutionParams {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
