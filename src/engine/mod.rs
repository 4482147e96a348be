//! The transition engine and its imperative shell.
//!
//! [`apply`] is the pure decision procedure: one snapshot and one action
//! in, one [`TransitionResult`] out, no side effects. [`Coordinator`]
//! owns the single live snapshot, journals outcomes, and emits `tracing`
//! events. [`SharedCoordinator`] serializes concurrent callers onto one
//! coordinator.

mod machine;
mod shared;
mod transition;

pub use machine::{Coordinator, WorkflowLog, WorkflowResult};
pub use shared::SharedCoordinator;
pub use transition::{apply, can_apply, replay, Rejection, TransitionResult};
