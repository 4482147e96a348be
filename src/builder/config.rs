//! Coordinator configuration.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// Journal bound used when no configuration says otherwise.
pub const DEFAULT_MAX_LOG_ENTRIES: usize = 1024;

/// Settings for the imperative shell around a workflow.
///
/// None of these affect which actions are accepted; they only shape what
/// the coordinator keeps in its journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Maximum journal entries kept; oldest dropped first. `None` keeps all,
    /// which a long-running coordinator should avoid.
    pub max_log_entries: Option<usize>,

    /// Whether rejected submissions are journaled alongside accepted ones.
    pub record_rejections: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_log_entries: Some(DEFAULT_MAX_LOG_ENTRIES),
            record_rejections: true,
        }
    }
}

impl CoordinatorConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if self.max_log_entries == Some(0) {
            return Err(BuildError::ZeroLogCapacity);
        }
        Ok(())
    }
}
