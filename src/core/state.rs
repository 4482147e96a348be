//! Core State trait for workflow snapshots.
//!
//! A state is one immutable composite value. Every field of a workflow lives
//! inside it, so the whole snapshot is replaced at once or not at all.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for workflow state snapshots.
///
/// All methods are pure - no side effects. A snapshot describes the
/// complete position of a workflow at one point in its linear history.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed to readers by value
/// - `PartialEq`: rejection is checked by comparing snapshots
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots are rendered for display
///
/// # Example
///
/// ```rust
/// use heist_coordinator::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Door {
///     open: bool,
///     armed: bool,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         if self.open { "Open" } else { "Closed" }
///     }
/// }
///
/// let door = Door { open: false, armed: true };
/// assert_eq!(door.name(), "Closed");
/// assert!(!door.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the snapshot's display name for rendering/logging.
    fn name(&self) -> &str;

    /// Check if this snapshot sits in a terminal stage.
    ///
    /// Terminal snapshots only change again through a reset.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
