//! Builder for constructing coordinators.

use crate::builder::config::CoordinatorConfig;
use crate::builder::error::BuildError;
use crate::core::Workflow;
use crate::engine::Coordinator;

/// Builder for constructing coordinators with a fluent API.
pub struct CoordinatorBuilder<W: Workflow> {
    workflow: Option<W>,
    config: CoordinatorConfig,
}

impl<W: Workflow> CoordinatorBuilder<W> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            workflow: None,
            config: CoordinatorConfig::default(),
        }
    }

    /// Set the workflow (required).
    pub fn workflow(mut self, workflow: W) -> Self {
        self.workflow = Some(workflow);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CoordinatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Bound the journal to the newest `limit` entries.
    pub fn max_log_entries(mut self, limit: usize) -> Self {
        self.config.max_log_entries = Some(limit);
        self
    }

    /// Choose whether rejected submissions are journaled.
    pub fn record_rejections(mut self, record: bool) -> Self {
        self.config.record_rejections = record;
        self
    }

    /// Build the coordinator at the workflow's initial snapshot.
    pub fn build(self) -> Result<Coordinator<W>, BuildError> {
        let workflow = self.workflow.ok_or(BuildError::MissingWorkflow)?;
        self.config.validate()?;
        Ok(Coordinator::with_config(workflow, self.config))
    }
}

impl<W: Workflow> Default for CoordinatorBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}
