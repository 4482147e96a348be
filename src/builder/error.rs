//! Build errors for coordinators and their configuration.

use thiserror::Error;

/// Errors that can occur when building a coordinator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Workflow not specified. Call .workflow(workflow) before .build()")]
    MissingWorkflow,

    #[error("Journal capacity must be at least 1 when bounded")]
    ZeroLogCapacity,

    #[error("Invalid coordinator configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
