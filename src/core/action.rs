//! Closed action tags submitted to a workflow.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the action type of a workflow.
///
/// Actions are intended transitions named by a tag. Implementors should be
/// closed enums so that an unhandled action is a compile error in the
/// workflow's guard table rather than a silent runtime no-op.
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's tag for display/logging.
    fn name(&self) -> &str;
}
